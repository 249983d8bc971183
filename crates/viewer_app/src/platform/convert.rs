//! Maps wire payloads from the archive API onto the core page model.

use viewer_core::{FileRef, PageDetail, PageMeta, PageStatus, PageSummary, ResultEntry};

pub(crate) fn summary_from_wire(page: viewer_engine::Page) -> PageSummary {
    PageSummary {
        id: page.id,
        url: page.url,
        status: PageStatus::from_wire(&page.status),
        created: page.created.to_rfc3339(),
        meta: meta_from_wire(page.meta),
    }
}

pub(crate) fn detail_from_wire(page: viewer_engine::PageWithResults) -> PageDetail {
    PageDetail {
        id: page.id,
        url: page.url,
        status: PageStatus::from_wire(&page.status),
        created: page.created.to_rfc3339(),
        meta: meta_from_wire(page.meta),
        results: page.results.into_iter().map(result_from_wire).collect(),
    }
}

fn meta_from_wire(meta: viewer_engine::PageMeta) -> PageMeta {
    PageMeta {
        title: meta.title,
        description: meta.description,
        error: meta.error,
    }
}

fn result_from_wire(result: viewer_engine::ResultEntry) -> ResultEntry {
    ResultEntry {
        format: result.format,
        error: result.error,
        files: result.files.into_iter().map(file_from_wire).collect(),
    }
}

fn file_from_wire(file: viewer_engine::FileEntry) -> FileRef {
    FileRef {
        id: file.id,
        name: file.name,
        mimetype: file.mimetype,
        size: file.size,
    }
}
