use forecast_summary::{generate_daily_summary, generate_summary, load_data_from_csv};

fn main() -> miette::Result<()> {
    env_logger::init();

    let file = std::env::args()
        .nth(1)
        .ok_or_else(|| miette::miette!("Missing filename"))?;
    log::info!("opening {file}");

    let forecast = load_data_from_csv(&file)?;

    print!("{}", generate_summary(&forecast)?);
    println!();
    print!("{}", generate_daily_summary(&forecast)?);

    Ok(())
}
