use tamarind::deck;

fn main() -> anyhow::Result<()> {
    let pres = deck::build()?;
    pres.save(deck::OUTPUT_FILE)?;
    println!("PPT_CREATED_AT:{}", deck::OUTPUT_FILE);
    Ok(())
}
