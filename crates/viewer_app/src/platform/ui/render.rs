use std::io::{self, Write};

use url::Url;
use viewer_core::{AppViewModel, ContentView, PageDetailView, PageRowView, ResultLinkView};

/// Output handle for the data region. All rendering goes through an
/// explicit region rather than a process-global stream.
pub struct DisplayRegion<W: Write> {
    out: W,
}

impl<W: Write> DisplayRegion<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Replaces the region's content with the given view. The previous content
/// is discarded wholesale; nothing is diffed or patched.
pub fn render<W: Write>(
    region: &mut DisplayRegion<W>,
    view: &AppViewModel,
    api_base: &Url,
) -> io::Result<()> {
    let out = &mut region.out;
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(72))?;
    match &view.content {
        ContentView::Empty => writeln!(out, "(nothing loaded)")?,
        ContentView::List(rows) => render_list(out, rows)?,
        ContentView::Detail(detail) => render_detail(out, detail, api_base)?,
    }
    out.flush()
}

/// Banner shown once at startup, titled after the service host.
pub fn banner(api_base: &Url) -> String {
    match api_base.host_str() {
        Some(host) => format!("WebArchive {host}"),
        None => "WebArchive".to_string(),
    }
}

fn render_list<W: Write>(out: &mut W, rows: &[PageRowView]) -> io::Result<()> {
    writeln!(out, "Archived pages ({})", rows.len())?;
    for row in rows {
        writeln!(out, "[{}] {}  {}", row.status, row.created, row.title)?;
        if !row.description.is_empty() {
            writeln!(out, "    {}", row.description)?;
        }
        writeln!(out, "    open {}", row.id)?;
    }
    Ok(())
}

fn render_detail<W: Write>(out: &mut W, detail: &PageDetailView, api_base: &Url) -> io::Result<()> {
    writeln!(out, "{}", detail.title)?;
    if !detail.description.is_empty() {
        writeln!(out, "{}", detail.description)?;
    }
    writeln!(out, "{}", detail.url)?;
    for result in &detail.results {
        match &result.link {
            ResultLinkView::Error { message } => {
                writeln!(out, "  {}  \u{26a0} {}", result.format, message)?;
            }
            ResultLinkView::Files(files) if files.is_empty() => {
                writeln!(out, "  {}", result.format)?;
            }
            ResultLinkView::Files(files) => {
                for file in files {
                    writeln!(
                        out,
                        "  {}  {} -> {}",
                        result.format,
                        file.name,
                        absolute(api_base, &file.href)
                    )?;
                }
            }
        }
    }
    Ok(())
}

/// File links leave the viewer; they are printed as absolute service URLs
/// for the user to open elsewhere.
fn absolute(api_base: &Url, href: &str) -> String {
    match api_base.join(href) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewer_core::{FileLinkView, ResultRowView};

    fn base() -> Url {
        Url::parse("http://127.0.0.1:5001").expect("base url")
    }

    fn rendered(view: &AppViewModel) -> String {
        let mut region = DisplayRegion::new(Vec::new());
        render(&mut region, view, &base()).expect("render ok");
        String::from_utf8(region.into_inner()).expect("utf8 output")
    }

    #[test]
    fn list_view_prints_one_row_per_page() {
        let view = AppViewModel {
            content: ContentView::List(vec![PageRowView {
                id: "a".to_string(),
                status: "done".to_string(),
                created: "2024".to_string(),
                title: "T".to_string(),
                description: "D".to_string(),
            }]),
            ..AppViewModel::default()
        };

        let output = rendered(&view);

        assert!(output.contains("Archived pages (1)"));
        assert!(output.contains("[done] 2024  T"));
        assert!(output.contains("open a"));
    }

    #[test]
    fn failed_result_shows_marker_instead_of_file_links() {
        let view = AppViewModel {
            content: ContentView::Detail(PageDetailView {
                id: "p1".to_string(),
                url: "https://example.com/".to_string(),
                title: "T".to_string(),
                description: String::new(),
                results: vec![ResultRowView {
                    format: "pdf".to_string(),
                    link: ResultLinkView::Error {
                        message: "render failed".to_string(),
                    },
                }],
            }),
            ..AppViewModel::default()
        };

        let output = rendered(&view);

        assert!(output.contains("pdf  \u{26a0} render failed"));
        assert!(!output.contains("/api/v1/pages"));
    }

    #[test]
    fn file_links_are_absolute_service_urls() {
        let view = AppViewModel {
            content: ContentView::Detail(PageDetailView {
                id: "p1".to_string(),
                url: "https://example.com/".to_string(),
                title: "T".to_string(),
                description: String::new(),
                results: vec![ResultRowView {
                    format: "headers".to_string(),
                    link: ResultLinkView::Files(vec![FileLinkView {
                        name: "headers.txt".to_string(),
                        href: "/api/v1/pages/p1/file/f1".to_string(),
                    }]),
                }],
            }),
            ..AppViewModel::default()
        };

        let output = rendered(&view);

        assert!(output.contains("headers.txt -> http://127.0.0.1:5001/api/v1/pages/p1/file/f1"));
    }

    #[test]
    fn banner_names_the_service_host() {
        assert_eq!(banner(&base()), "WebArchive 127.0.0.1");
    }
}
