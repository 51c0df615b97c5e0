use chrono::NaiveDate;
use mountainhub::{BoundingBox, LatLon, MountainHub, MountainHubError};
use std::env;

fn main() -> Result<(), MountainHubError> {
    // Set RUST_LOG=info (or debug) to see request logging
    env_logger::init();
    configure_polars_display();

    let client = MountainHub::new()?;
    let front_range = BoundingBox::from_corners(LatLon(39.0, -106.5), LatLon(40.5, -105.0));
    let season_start = NaiveDate::from_ymd_opt(2021, 11, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");

    let table = client
        .snow_data()
        .limit(200)
        .start(season_start)
        .bounding_box(front_range)
        .call()?;

    println!("{} observations with snow depth", table.len());
    println!("{}", table.to_dataframe()?);
    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
