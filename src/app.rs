use crate::cli::Cli;
use crate::report_renderer::ReportRenderer;
use crate::return_fetcher::ReturnFetcher;
use anyhow::Context;
use std::io::IsTerminal;

pub struct App {
    args: Cli,
    return_fetcher: ReturnFetcher,
    report_renderer: ReportRenderer,
}

impl App {
    pub fn new(args: Cli) -> Self {
        Self {
            args,
            return_fetcher: Default::default(),
            report_renderer: ReportRenderer,
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let result = self
            .return_fetcher
            .fetch_year_return()
            .await
            .context("Failed to fetch S&P 500 data")?;

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            let colorize = !self.args.no_color && std::io::stdout().is_terminal();
            print!(
                "{}",
                self.report_renderer.render(&result, colorize)
            );
        }

        Ok(())
    }
}
