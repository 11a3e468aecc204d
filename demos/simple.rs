use truthtable_rs::builder::StatementBuilder;
use truthtable_rs::shape::Shape;
use truthtable_rs::table::TruthTable;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut table = TruthTable::new(["P", "Q"])?;
    println!("table = {:?}", table);

    let builder = StatementBuilder::new();

    let pq_shape = Shape::pair(Shape::leaf("P"), Shape::leaf("Q"));

    let not_q = builder.primitive("NOT", Shape::leaf("Q"))?;
    println!("not_q = {}", not_q.name()?);

    let p_or_q = builder.compose("IDENTITY", "OR", "IDENTITY", pq_shape.clone())?;
    println!("p_or_q = {}", p_or_q.name()?);

    let conjunction = builder.compose(
        &p_or_q,
        "AND",
        &not_q,
        Shape::pair(pq_shape.clone(), Shape::leaf("Q")),
    )?;
    println!("conjunction = {}", conjunction.name()?);

    // ((P OR Q) AND [NOT Q]) -> P is a tautology.
    let implication = builder.compose(
        &conjunction,
        "->",
        "IDENTITY",
        Shape::pair(Shape::pair(pq_shape, Shape::leaf("Q")), Shape::leaf("P")),
    )?;
    println!("implication = {}", implication.name()?);

    table
        .add_column(&not_q)?
        .add_column(&p_or_q)?
        .add_column(&conjunction)?
        .add_column(&implication)?;

    println!("{}", table.view());

    println!("sat_count(conjunction) = {}", table.sat_count(&conjunction)?);
    println!("is_tautology(implication) = {}", table.is_tautology(&implication)?);

    Ok(())
}
