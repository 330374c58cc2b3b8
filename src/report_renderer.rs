use crate::return_fetcher::ReturnResult;
use colored::Color;
use colored::Colorize;
use itertools::Itertools;

const BORDER: &str = "==================================================";
const TITLE: &str = "       S&P 500 ONE-YEAR RETURN";

pub struct ReportRenderer;

impl ReportRenderer {
    /// Renders the bordered text report. `colorize` must already account for
    /// whether the output stream is a terminal.
    pub fn render(&self, result: &ReturnResult, colorize: bool) -> String {
        let headline = format!("  {}", render_return(result.year_return));
        let (border, title, headline, details) = if colorize {
            let color = if result.year_return >= 0.0 {
                Color::Green
            } else {
                Color::Red
            };
            (
                BORDER.bold().to_string(),
                TITLE.bold().to_string(),
                headline.color(color).bold().to_string(),
                "Details:".bold().to_string(),
            )
        } else {
            (BORDER.into(), TITLE.into(), headline, "Details:".into())
        };
        format!(
            "\n{border}\n{title}\n{border}\n\n{headline}\n\n{details}\n  \
             Current Price:      {}\n  \
             Price 1 Year Ago:   {}\n  \
             As of:              {}\n\n{border}\n\n",
            format_price(result.current_price),
            format_price(result.year_ago_price),
            result.date,
        )
    }
}

/// Renders the percentage with an explicit sign and 2 decimal places.
fn render_return(year_return: f64) -> String {
    format!("{:+.2}%", year_return)
}

/// Formats a price with a dollar sign, thousands separators and 2 decimal
/// places.
fn format_price(price: f64) -> String {
    let amount = format!("{:.2}", price);
    let Some((whole, cents)) = amount.split_once('.') else {
        return format!("${}", amount);
    };
    let grouped = whole
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|group| std::str::from_utf8(group).unwrap_or_default())
        .join(",");
    format!("${}.{}", grouped, cents)
}
