//! Calculator page rendering
//!
//! The page template is embedded at compile time and filled in a single
//! pass, so user text containing `{{...}}` is never expanded.

use crate::models::SaltResult;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Everything the calculator page shows
#[derive(Debug, Clone, Copy, Default)]
pub struct PageView<'a> {
    /// Raw rib weight text, echoed back into the form
    pub rib_weight: &'a str,
    /// Raw rub sodium text, echoed back into the form
    pub rub_sodium: &'a str,
    pub result: Option<&'a SaltResult>,
    pub error: Option<&'a str>,
}

/// Render the calculator page
pub fn render_index(view: &PageView<'_>) -> String {
    let rib_weight = html_escape::encode_double_quoted_attribute(view.rib_weight);
    let rub_sodium = html_escape::encode_double_quoted_attribute(view.rub_sodium);
    let error = view.error.map(render_error).unwrap_or_default();
    let result = view.result.map(render_result).unwrap_or_default();

    fill_template(
        INDEX_TEMPLATE,
        &[
            ("RIB_WEIGHT", rib_weight.as_ref()),
            ("RUB_SODIUM", rub_sodium.as_ref()),
            ("ERROR", error.as_str()),
            ("RESULT", result.as_str()),
        ],
    )
}

fn render_error(message: &str) -> String {
    format!(
        "<div class=\"error\" role=\"alert\">{}</div>",
        html_escape::encode_text(message)
    )
}

fn render_result(result: &SaltResult) -> String {
    let rub = &result.rub_calculation;
    let rows = [
        ("Number of racks", format!("{}", rub.number_of_racks)),
        ("Total rub", format!("{} tbsp", rub.total_rub_tbsp)),
        ("Total rub", format!("{} tsp", rub.total_rub_tsp)),
        ("Quarter teaspoons of rub", format!("{}", rub.total_quarter_tsp)),
        ("Sodium from rub", format!("{} mg", rub.total_rub_sodium)),
        ("Recommended total sodium", format!("{} mg", result.recommended_total_sodium)),
        ("Additional sodium needed", format!("{} mg", result.additional_sodium_needed)),
        ("Additional kosher salt", format!("{} tsp", result.additional_salt_tsp)),
        ("Additional kosher salt", format!("{} &times; 1/4 tsp", result.additional_salt_quarter_tsp)),
    ];

    let mut html = String::from("<section class=\"result\">\n<h2>Results</h2>\n");
    html.push_str(&format!(
        "<p class=\"advice\">{}</p>\n<table>\n",
        html_escape::encode_text(&result.advice_message())
    ));
    for (label, value) in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"value\">{}</td></tr>\n",
            label, value
        ));
    }
    html.push_str("</table>\n</section>");
    html
}

/// Replace `{{KEY}}` placeholders in one pass; unknown keys are left as-is
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len() + 1024);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &after_open[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sodium::compute_additional_salt;

    #[test]
    fn test_template_placeholders_exist() {
        for placeholder in ["{{RIB_WEIGHT}}", "{{RUB_SODIUM}}", "{{ERROR}}", "{{RESULT}}"] {
            assert!(
                INDEX_TEMPLATE.contains(placeholder),
                "index template missing placeholder: {placeholder}"
            );
        }
        assert!(INDEX_TEMPLATE.contains("<form method=\"post\" action=\"/calculate\">"));
    }

    #[test]
    fn test_fill_template() {
        let filled = fill_template("a {{X}} b {{Y}} c {{Z}}", &[("X", "1"), ("Y", "{{X}}")]);
        assert_eq!(filled, "a 1 b {{X}} c {{Z}}");
        assert_eq!(fill_template("open {{X", &[("X", "1")]), "open {{X");
    }

    #[test]
    fn test_render_empty_form() {
        let html = render_index(&PageView::default());
        assert!(html.contains("value=\"\""));
        assert!(!html.contains("{{"));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn test_render_result() {
        let result = compute_additional_salt(4.0, 10.0);
        let html = render_index(&PageView {
            rib_weight: "4",
            rub_sodium: "10",
            result: Some(&result),
            error: None,
        });
        assert!(html.contains("value=\"4\""));
        assert!(html.contains("960.0 mg"));
        assert!(html.contains("1600.0 mg"));
        assert!(html.contains("Add 1.33 tsp of kosher salt"));
    }

    #[test]
    fn test_render_escapes_echoed_input() {
        let html = render_index(&PageView {
            rib_weight: r#""><script>alert('xss')</script>"#,
            rub_sodium: "{{RESULT}}",
            result: None,
            error: Some("Please enter valid numbers."),
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains("value=\"{{RESULT}}\""));
        assert!(html.contains("Please enter valid numbers."));
    }
}
