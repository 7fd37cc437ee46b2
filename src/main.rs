use battleship_solo::{
    init_logging, parse_command, populate_fleet, render_fleet_status, render_grid, Command,
    FireResult, Grid, ViewMode, FLEET, GRID_COLS, GRID_ROWS, TOTAL_SHIP_CELLS,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about = "Single-player battleship: sink the hidden fleet", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible ship placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Start with all ship positions revealed (debug)")]
    reveal: bool,
}

fn print_help() {
    println!("Commands:");
    println!("  <row letter><column number>  fire a torpedo, e.g. B7");
    println!("  show / hide                  toggle the reveal view");
    println!("  help                         this message");
    println!("  quit                         abandon the game");
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (placement will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut grid = Grid::new(GRID_ROWS, GRID_COLS);
    populate_fleet(&mut rng, &mut grid)?;

    let mut mode = if cli.reveal {
        ViewMode::Show
    } else {
        ViewMode::Hide
    };
    let mut shots = 0usize;

    println!(
        "The enemy fleet is hiding: {} ships, {} cells. Fire at targets like B7.",
        FLEET.len(),
        TOTAL_SHIP_CELLS
    );

    loop {
        println!("\n{}", render_grid(&grid, mode));
        if mode == ViewMode::Show {
            println!("{}", render_fleet_status(&grid));
        }
        print!("Shots fired: {}  Enter target ('help' for commands): ", shots);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line, grid.rows(), grid.cols()) {
            Ok(c) => c,
            Err(msg) => {
                println!("Invalid move, try again. ({})", msg);
                continue;
            }
        };

        match command {
            Command::Show => mode = ViewMode::Show,
            Command::Hide => mode = ViewMode::Hide,
            Command::Help => print_help(),
            Command::Quit => {
                println!("Abandoning the hunt.");
                break;
            }
            Command::Fire(row, col) => {
                let result = grid.fire_at_square(row, col)?;
                shots += 1;
                match result {
                    FireResult::Miss => println!("Splash. Nothing there."),
                    FireResult::Hit => println!("Direct hit!"),
                    FireResult::Waste => println!("You already shelled that square."),
                    FireResult::Sunk => {
                        let afloat = grid.ships().iter().filter(|s| s.is_floating()).count();
                        println!("You sank a ship! {} still afloat.", afloat);
                    }
                    FireResult::Win => {
                        println!("\n{}", render_grid(&grid, ViewMode::Hide));
                        println!("The last ship is down. Victory in {} shots!", shots);
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}
