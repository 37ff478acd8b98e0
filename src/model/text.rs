use nalgebra::Point2;

/// What a piece of text is for; the view picks font size and color from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    InfoTitle,
    InfoFact,
    InfoDescription,
    InfoFunFact,
    BodyName,
    BodyCaption,
    PanelTitle,
    PanelButton,
    PanelSpeed,
    PanelHeading,
    PanelStatus,
    PanelWarning,
    PanelHint,
}

/// A line of text, horizontally centered on `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub position: Point2<f64>,
    pub style: TextStyle,
}

impl TextLine {
    pub fn new(text: impl Into<String>, x: f64, y: f64, style: TextStyle) -> Self {
        TextLine {
            text: text.into(),
            position: Point2::new(x, y),
            style,
        }
    }
}
