//! Print-ready HTML document assembly.
//!
//! Produces one self-contained page: collected font faces and styles, fixed
//! print CSS that puts one slide on each landscape page, a print button, and
//! every slide wrapped in a `.slide` div.

use crate::config::{
    DOCUMENT_LANG, DOCUMENT_TITLE, PAGE_HEIGHT_PX, PAGE_WIDTH_PX, PRINT_BUTTON_LABEL,
};
use crate::types::{ExtractedStyles, SlideFragment};

/// Builds the output document from styles and slide fragments.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler;

impl DocumentAssembler {
    /// Create a new document assembler.
    pub fn new() -> Self {
        Self
    }

    /// Assemble the complete output document.
    ///
    /// Fragment markup is inserted verbatim, in slice order.
    pub fn assemble(&self, styles: &ExtractedStyles, slides: &[SlideFragment]) -> String {
        let mut html = self.head(styles);

        for slide in slides {
            html.push_str("    <div class=\"slide\">\n");
            html.push_str(&slide.html);
            html.push_str("\n    </div>\n");
        }

        html.push_str("</body>\n</html>");
        html
    }

    /// Everything up to and including the print button.
    fn head(&self, styles: &ExtractedStyles) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width={width}, initial-scale=1.0">
    <title>{title}</title>

    <style>
        /* Font faces */
        {font_faces}

        /* All extracted styles */
        {styles}

        /* Print styles */
{print_css}    </style>
</head>
<body>
    <button onclick="window.print()" class="print-btn">{label}</button>

"#,
            lang = DOCUMENT_LANG,
            width = PAGE_WIDTH_PX,
            title = DOCUMENT_TITLE,
            font_faces = styles.font_face_css(),
            styles = styles.style_css(),
            print_css = self.print_css(),
            label = PRINT_BUTTON_LABEL,
        )
    }

    /// Page setup, slide sizing and the floating print button.
    fn print_css(&self) -> String {
        format!(
            r#"        @page {{
            size: {w}px {h}px landscape;
            margin: 0;
        }}

        body {{
            margin: 0;
            padding: 0;
            background: #000;
            -webkit-print-color-adjust: exact !important;
            print-color-adjust: exact !important;
            color-adjust: exact !important;
        }}

        .slide {{
            width: {w}px;
            height: {h}px;
            page-break-after: always;
            break-after: page;
            page-break-inside: avoid;
            break-inside: avoid;
            position: relative;
            overflow: hidden;
        }}

        .slide:last-child {{
            page-break-after: auto;
        }}

        @media print {{
            .print-btn {{
                display: none !important;
            }}
            body {{
                -webkit-print-color-adjust: exact !important;
                print-color-adjust: exact !important;
                color-adjust: exact !important;
            }}
        }}

        .print-btn {{
            position: fixed;
            top: 20px;
            right: 20px;
            padding: 15px 30px;
            background: #4CAF50;
            color: white;
            border: none;
            border-radius: 8px;
            font-size: 18px;
            cursor: pointer;
            z-index: 9999;
            box-shadow: 0 4px 15px rgba(0,0,0,0.3);
        }}

        .print-btn:hover {{
            background: #45a049;
        }}
"#,
            w = PAGE_WIDTH_PX,
            h = PAGE_HEIGHT_PX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(parts: &[&str]) -> Vec<SlideFragment> {
        parts.iter().map(|html| SlideFragment::new(*html)).collect()
    }

    #[test]
    fn test_empty_deck_is_valid_document() {
        let html = DocumentAssembler::new().assemble(&ExtractedStyles::default(), &[]);

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"uk\">"));
        assert!(html.ends_with("</body>\n</html>"));
        assert!(html.contains(r#"<button onclick="window.print()" class="print-btn">"#));
        assert!(!html.contains(r#"<div class="slide">"#));
    }

    #[test]
    fn test_slides_wrapped_in_order() {
        let deck = slides(&["<div>first</div>", "<div>second</div>"]);
        let html = DocumentAssembler::new().assemble(&ExtractedStyles::default(), &deck);

        assert_eq!(html.matches(r#"<div class="slide">"#).count(), 2);
        assert!(html.contains("    <div class=\"slide\">\n<div>first</div>\n    </div>\n"));
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert!(html.ends_with("    </div>\n</body>\n</html>"));
    }

    #[test]
    fn test_styles_injected_before_print_css() {
        let styles = ExtractedStyles {
            font_faces: vec![
                "@font-face{font-family:A}".into(),
                "@font-face{font-family:B}".into(),
            ],
            styles: vec![".x{}".into(), ".y{}".into()],
        };
        let html = DocumentAssembler::new().assemble(&styles, &[]);

        let fonts = html.find("@font-face{font-family:A}\n@font-face{font-family:B}").unwrap();
        let css = html.find(".x{}\n.y{}").unwrap();
        let page = html.find("@page").unwrap();
        assert!(fonts < css && css < page);
    }

    #[test]
    fn test_print_css_page_geometry() {
        let html = DocumentAssembler::new().assemble(&ExtractedStyles::default(), &[]);

        assert!(html.contains("size: 1280px 720px landscape;"));
        assert!(html.contains("width: 1280px;\n            height: 720px;"));
        assert!(html.contains(".slide:last-child {\n            page-break-after: auto;"));
        assert!(html.contains("print-color-adjust: exact !important;"));
        assert!(html.contains("display: none !important;"));
    }

    #[test]
    fn test_title_lang_and_button() {
        let html = DocumentAssembler::new().assemble(&ExtractedStyles::default(), &[]);

        assert!(html.contains(&format!("<title>{}</title>", DOCUMENT_TITLE)));
        assert!(html.contains(&format!("<html lang=\"{}\">", DOCUMENT_LANG)));
        let button = format!("class=\"print-btn\">{}</button>", PRINT_BUTTON_LABEL);
        assert!(html.contains(&button));
    }
}
