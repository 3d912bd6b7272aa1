use crate::output::print_json;
use delais_cpc::deadlines::Act;
use serde::Serialize;

#[derive(Serialize)]
struct ActInfo {
    key: &'static str,
    label: &'static str,
    selector: &'static str,
    values: Vec<SelectorInfo>,
}

#[derive(Serialize)]
struct SelectorInfo {
    key: &'static str,
    label: &'static str,
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let acts: Vec<ActInfo> = Act::ALL
        .into_iter()
        .map(|act| {
            let kind = act.selector_kind();
            ActInfo {
                key: act.key(),
                label: act.label(),
                selector: kind.label(),
                values: kind
                    .values()
                    .into_iter()
                    .map(|s| SelectorInfo {
                        key: s.key(),
                        label: s.label(),
                    })
                    .collect(),
            }
        })
        .collect();

    if json {
        return print_json(&acts);
    }

    let rows: Vec<[String; 4]> = acts
        .iter()
        .map(|a| {
            let values: Vec<&str> = a.values.iter().map(|v| v.key).collect();
            [
                a.key.to_string(),
                a.label.to_string(),
                a.selector.to_string(),
                values.join(", "),
            ]
        })
        .collect();
    print!("{}", render_table(HEADERS, &rows));
    Ok(())
}

const HEADERS: [&str; 4] = ["ACT", "LABEL", "SELECTOR", "VALUES"];

/// Lay the rows out in left-aligned columns under `headers`.
///
/// Widths count characters, not bytes: labels carry accents.
fn render_table(headers: [&str; 4], rows: &[[String; 4]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = line(&headers, &widths);
    out.push_str(&line(&widths.map(|w| "-".repeat(w)), &widths));
    for row in rows {
        out.push_str(&line(row, &widths));
    }
    out
}

fn line<S: AsRef<str>>(cells: &[S; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:width$}", cell.as_ref()))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}
