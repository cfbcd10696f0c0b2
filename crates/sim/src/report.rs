use crate::simulation::DaySnapshot;

/// Plain-text report, one block per day:
///
/// ```text
/// -------- day 0 --------
/// name, sellIn, quality
/// +5 Dexterity Vest, 10, 20
/// ```
///
/// Each block ends with a blank line.
pub fn render_text(snapshots: &[DaySnapshot]) -> String {
    let mut out = String::new();
    for snapshot in snapshots {
        out.push_str(&format!("-------- day {} --------\n", snapshot.day));
        out.push_str("name, sellIn, quality\n");
        for item in &snapshot.items {
            out.push_str(&format!("{item}\n"));
        }
        out.push('\n');
    }
    out
}

pub fn render_json(snapshots: &[DaySnapshot]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshots)
}
