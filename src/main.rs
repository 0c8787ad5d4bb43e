#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    gui::{Assets, PointerApp, PointerLayout},
    init_logging, ConsoleDriver, CELL_HEIGHT, CELL_WIDTH, EDGE_TOLERANCE, MAX_CELL_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the text console, typing 1-indexed "row column" pairs.
    Console,
    /// Play with the mouse in a full-screen terminal view.
    Graphical {
        #[arg(long, default_value_t = CELL_WIDTH, value_parser = clap::value_parser!(u16).range(3..=MAX_CELL_SIZE as i64))]
        cell_width: u16,
        #[arg(long, default_value_t = CELL_HEIGHT, value_parser = clap::value_parser!(u16).range(3..=MAX_CELL_SIZE as i64))]
        cell_height: u16,
        #[arg(long, default_value_t = EDGE_TOLERANCE, help = "Ignore clicks this close to a cell boundary")]
        tolerance: u16,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Console => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut driver = ConsoleDriver::new(stdin.lock(), stdout.lock());
            driver.run()?;
        }
        Commands::Graphical {
            cell_width,
            cell_height,
            tolerance,
        } => {
            if u32::from(tolerance) * 2 >= u32::from(cell_width.min(cell_height)) {
                anyhow::bail!("tolerance {} leaves no clickable area", tolerance);
            }
            let assets = Assets::load();
            let layout = PointerLayout {
                cell_width,
                cell_height,
                tolerance,
            };
            PointerApp::new(layout, &assets).run()?;
        }
    }
    Ok(())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn cell_size_is_bounded() {
        let max = MAX_CELL_SIZE.to_string();
        let cli = Cli::try_parse_from(["tictactoe", "graphical", "--cell-width", max.as_str()]).unwrap();
        assert!(matches!(cli.command, Commands::Graphical { cell_width, .. } if cell_width == MAX_CELL_SIZE));
        assert!(Cli::try_parse_from(["tictactoe", "graphical", "--cell-width", "30000"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "graphical", "--cell-height", "1001"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "graphical", "--cell-height", "2"]).is_err());
    }
}
