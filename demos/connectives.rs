use clap::Parser;

use truthtable_rs::builder::StatementBuilder;
use truthtable_rs::connective::{Arity, Connective};
use truthtable_rs::shape::Shape;
use truthtable_rs::table::TruthTable;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Left variable name.
    #[arg(value_name = "NAME", default_value = "P")]
    left: String,

    /// Right variable name.
    #[arg(value_name = "NAME", default_value = "Q")]
    right: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let mut table = TruthTable::new([args.left.as_str(), args.right.as_str()])?;
    let builder = StatementBuilder::new();

    let shape = Shape::pair(Shape::leaf(&args.left), Shape::leaf(&args.right));

    let not_left = builder.primitive("NOT", Shape::leaf(&args.left))?;
    table.add_column(&not_left)?;

    // One column per binary connective.
    for connective in Connective::all() {
        if connective.arity() != Arity::Binary {
            continue;
        }
        let statement = builder.compose("IDENTITY", connective.token(), "IDENTITY", shape.clone())?;
        println!(
            "{} satisfied under {} of 4 assignments",
            statement.name()?,
            table.sat_count(&statement)?
        );
        table.add_column(&statement)?;
    }

    println!("{}", table.view());

    Ok(())
}
