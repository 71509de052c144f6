//! Askama templates for the web frontend.

use askama::Template;

/// Home page with the station pair form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// A rendered departure report.
#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub title: String,
    pub from: String,
    pub to: String,
    pub report: String,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_escaped_inside_pre() {
        let html = ReportTemplate {
            title: "PAD to RDG".into(),
            from: "PAD".into(),
            to: "RDG".into(),
            report: "PAD 10:02 -> RDG 10:31 => LATE".into(),
        }
        .render()
        .unwrap();

        assert!(html.contains("<pre>"));
        assert!(html.contains("PAD 10:02 -&gt; RDG 10:31 =&gt; LATE"));
    }

    #[test]
    fn error_details_are_optional() {
        let without = ErrorTemplate {
            title: "Bad request".into(),
            message: "invalid station code".into(),
            details: None,
        }
        .render()
        .unwrap();
        assert!(without.contains("invalid station code"));
        assert!(!without.contains("class=\"details\""));

        let with = ErrorTemplate {
            title: "Bad gateway".into(),
            message: "failed to fetch live departures".into(),
            details: Some("<b>503</b>".into()),
        }
        .render()
        .unwrap();
        assert!(with.contains("class=\"details\""));
        assert!(with.contains("&lt;b&gt;503&lt;/b&gt;"));
    }

    #[test]
    fn index_has_form() {
        let html = IndexTemplate.render().unwrap();
        assert!(html.contains("name=\"from\""));
        assert!(html.contains("name=\"to\""));
    }
}
