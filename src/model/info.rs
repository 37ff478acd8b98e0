use super::catalog::SUN_KEY;
use super::facts::fact_sheet;
use super::text::{TextLine, TextStyle};

// Layout of the fact sheet, in canvas coordinates. It hangs down from the top
// of the canvas, centered horizontally.
const TITLE_BELOW_TOP: f64 = 70.0;
const FIRST_FACT_BELOW_TOP: f64 = 100.0;
const FACT_STEP: f64 = 25.0;
const DESCRIPTION_GAP: f64 = 10.0;
const FUN_FACT_GAP: f64 = 40.0;

/// Lays out the fact sheet for `key` below `canvas_top`, or returns None if
/// there's no sheet for it.
pub fn info_panel_lines(key: &str, canvas_top: f64) -> Option<Vec<TextLine>> {
    let sheet = fact_sheet(key)?;

    let mut facts = vec![
        format!("Type: {}", sheet.kind),
        format!("Diameter: {}", sheet.diameter),
        format!("Mass: {}", sheet.mass),
    ];
    if let Some(temperature) = sheet.temperature {
        facts.push(format!("Temperature: {}", temperature));
    }
    if let Some(period) = sheet.orbital_period {
        if key != SUN_KEY {
            facts.push(format!("Orbital Period: {}", period));
        }
    }
    if let Some(composition) = sheet.composition {
        facts.push(format!("Composition: {}", composition));
    }

    let mut lines = vec![TextLine::new(
        format!("{} Information", sheet.name),
        0.0,
        canvas_top - TITLE_BELOW_TOP,
        TextStyle::InfoTitle,
    )];

    let mut y = canvas_top - FIRST_FACT_BELOW_TOP;
    for fact in facts {
        lines.push(TextLine::new(fact, 0.0, y, TextStyle::InfoFact));
        y -= FACT_STEP;
    }

    lines.push(TextLine::new(
        sheet.description,
        0.0,
        y - DESCRIPTION_GAP,
        TextStyle::InfoDescription,
    ));
    lines.push(TextLine::new(
        format!("Fun Fact: {}", sheet.fun_fact),
        0.0,
        y - FUN_FACT_GAP,
        TextStyle::InfoFunFact,
    ));

    Some(lines)
}
