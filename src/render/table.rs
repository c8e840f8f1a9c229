use crate::domain::model::ReportRow;

const GROUP_HEADER: &str = "position";
const VALUE_HEADER: &str = "performance";

/// 依 performance 由高到低排序；穩定排序，平手的列保持原本順序
pub fn sort_rows(rows: &mut [ReportRow]) {
    rows.sort_by(|a, b| b.performance.total_cmp(&a.performance));
}

/// 畫出格線表格：名次從 1 起算，文字靠左，數字靠右並固定兩位小數
pub fn render_table(rows: &[ReportRow]) -> String {
    let ranks: Vec<String> = (1..=rows.len()).map(|rank| rank.to_string()).collect();
    let values: Vec<String> = rows
        .iter()
        .map(|row| format!("{:.2}", row.performance))
        .collect();

    let rank_width = column_width(" ", ranks.iter().map(String::as_str));
    let group_width = column_width(GROUP_HEADER, rows.iter().map(|row| row.position.as_str()));
    let value_width = column_width(VALUE_HEADER, values.iter().map(String::as_str));

    let row_rule = rule('-', &[rank_width, group_width, value_width]);

    let mut lines = vec![row_rule.clone()];
    lines.push(format!(
        "| {:>rank_width$} | {:<group_width$} | {:>value_width$} |",
        " ", GROUP_HEADER, VALUE_HEADER
    ));
    lines.push(rule('=', &[rank_width, group_width, value_width]));

    for ((rank, row), value) in ranks.iter().zip(rows).zip(&values) {
        lines.push(format!(
            "| {:>rank_width$} | {:<group_width$} | {:>value_width$} |",
            rank, row.position, value
        ));
        lines.push(row_rule.clone());
    }

    lines.join("\n")
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain([header.chars().count()])
        .max()
        .unwrap_or(1)
}

fn rule(fill: char, widths: &[usize]) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.extend(std::iter::repeat(fill).take(width + 2));
        out.push('+');
    }
    out
}
