use std::io::{self, BufRead, Write};

use anyhow::Context;
use structopt::StructOpt;

use pagelex::report::{Outcome, Report, URL_PROMPT};
use pagelex::Pipeline;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "pagelex",
    about = "Keywords and word stems of a single web page."
)]
struct App {
    #[structopt(
        name = "url",
        help = "The url of the page, asked for interactively if missing."
    )]
    url: Option<String>,
}

impl App {
    /// Runs the pipeline and reports every stage.
    async fn run(self) -> anyhow::Result<Outcome> {
        let url = match self.url {
            Some(url) => url,
            None => Self::prompt_url()?,
        };

        let mut report = Report::new(io::stdout());
        Ok(report.analyze(&Pipeline::default(), &url).await?)
    }

    /// Ask for the url on stdout and read a single line.
    fn prompt_url() -> anyhow::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", URL_PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read the url.")?;
        Ok(line.trim().to_string())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let outcome = App::from_args().run().await?;
    if outcome != Outcome::Completed {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}
