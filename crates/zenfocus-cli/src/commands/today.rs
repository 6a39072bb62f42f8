use chrono::{Local, Timelike};
use zenfocus_core::clock::{self, MonthGrid};
use zenfocus_core::error::Result;
use zenfocus_core::CoreError;

pub fn run(month_offset: i32) -> Result<()> {
    let now = Local::now().naive_local();
    println!("{}", clock::greeting(now.hour()));
    println!("{}", clock::clock_text(&now));
    println!("{}", clock::date_text(&now.date()));
    println!();

    let grid = MonthGrid::around(now.date(), month_offset).ok_or_else(|| {
        CoreError::Custom(format!("month offset {month_offset} is out of range"))
    })?;
    print!("{grid}");
    Ok(())
}
