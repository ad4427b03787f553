use line_core::api::{BoardView, LineView, PlayerView};

fn labels(players: &[PlayerView]) -> String {
    players.iter().map(|p| p.label.as_str()).collect::<Vec<_>>().join(", ")
}

fn line(title: &str, line: &LineView) -> String {
    let mut out = format!(
        "  {:<8} [{}O/{}W] {}",
        title,
        line.breakdown.open,
        line.breakdown.women,
        labels(&line.players)
    );
    if line.short {
        out.push_str(&format!("  (short: needs {}O/{}W)", line.pattern.open, line.pattern.women));
    }
    out
}

/// Plain-text scoreboard.
pub fn board(view: &BoardView) -> String {
    [
        format!(
            "{} {} - {} {}   point {} ({} {})",
            view.home.name,
            view.home.score,
            view.away.score,
            view.away.name,
            view.point_number,
            view.ratio_policy,
            view.pattern_label
        ),
        line("current", &view.current_line),
        line("next", &view.next_line),
    ]
    .join("\n")
}
