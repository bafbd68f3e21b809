// Export boundary: what an external PDF rasterizer needs to print the CV.
// The page is captured as one image and scaled to fit a single A4 sheet.

use serde::Serialize;

use crate::document::session::EditorSession;
use crate::render::{render, RenderTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
}

/// Physical page the render tree is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSpec {
    pub format: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
    pub orientation: Orientation,
    /// Device pixels per CSS pixel when capturing the page.
    pub capture_scale: f64,
    pub jpeg_quality: f64,
}

pub const A4_PORTRAIT: PageSpec = PageSpec {
    format: "a4",
    width_mm: 210.0,
    height_mm: 297.0,
    orientation: Orientation::Portrait,
    capture_scale: 2.0,
    jpeg_quality: 0.98,
};

/// Where a captured image lands on the page, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageSpec {
    /// Scales a `width_px` × `height_px` capture to fit the page, centred, aspect preserved.
    pub fn fit(&self, width_px: f64, height_px: f64) -> Placement {
        if width_px <= 0.0 || height_px <= 0.0 {
            return Placement {
                x: 0.0,
                y: 0.0,
                width: self.width_mm,
                height: self.height_mm,
            };
        }
        let scale = (self.width_mm / width_px).min(self.height_mm / height_px);
        let width = width_px * scale;
        let height = height_px * scale;
        Placement {
            x: (self.width_mm - width) / 2.0,
            y: (self.height_mm - height) / 2.0,
            width,
            height,
        }
    }
}

/// `CV_<full name>.pdf`, each whitespace run in the name replaced by one `_`.
pub fn export_filename(full_name: &str) -> String {
    let mut name = String::with_capacity(full_name.len());
    let mut in_space = false;
    for c in full_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    format!("CV_{name}.pdf")
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportJob {
    pub filename: String,
    pub page: PageSpec,
    /// Present when the caller reported the capture size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    pub tree: RenderTree,
}

pub fn prepare_export(session: &EditorSession, capture_px: Option<(f64, f64)>) -> ExportJob {
    let page = A4_PORTRAIT;
    ExportJob {
        filename: export_filename(&session.document().full_name),
        page,
        placement: capture_px.map(|(w, h)| page.fit(w, h)),
        tree: render(session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::TextField;
    use crate::locale::Language;

    #[test]
    fn test_filename_collapses_whitespace_runs() {
        assert_eq!(export_filename("Mario Rossi"), "CV_Mario_Rossi.pdf");
        assert_eq!(export_filename("Anna  Maria\tBianchi"), "CV_Anna_Maria_Bianchi.pdf");
        assert_eq!(export_filename(" Lead "), "CV__Lead_.pdf");
        assert_eq!(export_filename(""), "CV_.pdf");
    }

    #[test]
    fn test_fit_tall_capture_is_height_bound_and_centred() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        let placement = A4_PORTRAIT.fit(1000.0, 2000.0);
        assert!(close(placement.height, 297.0));
        assert!(close(placement.width, 148.5));
        assert!(close(placement.x, 30.75));
        assert!(close(placement.y, 0.0));
    }

    #[test]
    fn test_fit_degenerate_capture_fills_page() {
        let placement = A4_PORTRAIT.fit(0.0, 100.0);
        assert_eq!((placement.width, placement.height), (210.0, 297.0));
    }

    #[test]
    fn test_prepare_export_uses_current_template_and_name() {
        let mut session = EditorSession::new(Language::It);
        session.set_text(TextField::FullName, "Giulia Verdi");
        let job = prepare_export(&session, None);
        assert_eq!(job.filename, "CV_Giulia_Verdi.pdf");
        assert_eq!(job.tree.template, session.template());
        assert_eq!(job.page.width_mm, 210.0);
        assert!(job.placement.is_none());

        let sized = prepare_export(&session, Some((2100.0, 2970.0)));
        assert!(sized.placement.is_some_and(|p| p.x.abs() < 1e-9));
    }
}
