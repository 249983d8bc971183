use crate::state::{DisplayContent, PageDetail, PageSummary, ResultEntry, ViewState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub route: ViewState,
    pub content: ContentView,
    pub dirty: bool,
}

/// Display-ready projection of the current content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentView {
    #[default]
    Empty,
    List(Vec<PageRowView>),
    Detail(PageDetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRowView {
    pub id: String,
    pub status: String,
    pub created: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDetailView {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub results: Vec<ResultRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub format: String,
    pub link: ResultLinkView,
}

/// What a capture result row links to: its files, or an error marker when
/// the capture failed (the error suppresses the files list even when one
/// is present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLinkView {
    Error { message: String },
    Files(Vec<FileLinkView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLinkView {
    pub name: String,
    /// Service path of the stored file, opened in a separate browsing
    /// context by the user.
    pub href: String,
}

pub(crate) fn content_view(content: &DisplayContent) -> ContentView {
    match content {
        DisplayContent::Empty => ContentView::Empty,
        DisplayContent::List(items) => ContentView::List(items.iter().map(page_row).collect()),
        DisplayContent::Detail(detail) => ContentView::Detail(detail_view(detail)),
    }
}

fn page_row(page: &PageSummary) -> PageRowView {
    PageRowView {
        id: page.id.clone(),
        status: page.status.label().to_string(),
        created: page.created.clone(),
        title: page.meta.title.clone(),
        description: page.meta.description.clone(),
    }
}

fn detail_view(detail: &PageDetail) -> PageDetailView {
    PageDetailView {
        id: detail.id.clone(),
        url: detail.url.clone(),
        title: detail.meta.title.clone(),
        description: detail.meta.description.clone(),
        results: detail
            .results
            .iter()
            .map(|result| result_row(&detail.id, result))
            .collect(),
    }
}

fn result_row(page_id: &str, result: &ResultEntry) -> ResultRowView {
    let link = match result.error.as_deref() {
        Some(message) if !message.is_empty() => ResultLinkView::Error {
            message: message.to_string(),
        },
        _ => ResultLinkView::Files(
            result
                .files
                .iter()
                .map(|file| FileLinkView {
                    name: file.name.clone(),
                    href: format!("/api/v1/pages/{}/file/{}", page_id, file.id),
                })
                .collect(),
        ),
    };

    ResultRowView {
        format: result.format.clone(),
        link,
    }
}
