// Timetable Engine Demo
// Renders the current month as text with per-day class counts

use anyhow::anyhow;
use chrono::{Datelike, Local};

use timetable_engine::models::schedule::ScheduleRecord;
use timetable_engine::services::grid::build_month_grid;
use timetable_engine::services::recurrence::schedules_for_date;
use timetable_engine::services::store::{MemoryStore, ScheduleStore};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting timetable engine demo");

    let mut store = MemoryStore::new();
    let seed = [
        ("CS101", "Intro to CS", "Monday", "09:00", "10:30", "Room 4"),
        ("MA202", "Linear Algebra", "Wednesday", "14:00", "16:00", "Hall B"),
        ("PH301", "Quantum Mechanics", "Friday", "08:00", "09:30", "Physics Lab"),
    ];
    for (code, name, day, start, end, location) in seed {
        let record =
            ScheduleRecord::new(code, name, day, start, end, location).map_err(|e| anyhow!(e))?;
        store.create(record)?;
    }

    let schedules = store.list()?;
    let today = Local::now().date_naive();

    println!("{} {}", month_name(today.month()), today.year());
    println!("Mon Tue Wed Thu Fri Sat Sun");

    for (index, cell) in build_month_grid(today).iter().enumerate() {
        let count = schedules_for_date(&schedules, cell.date).len();
        let marker = if count > 0 { '*' } else { ' ' };
        if cell.in_current_month {
            print!("{:3}{}", cell.date.day(), marker);
        } else {
            print!("  .{}", marker);
        }
        if index % 7 == 6 {
            println!();
        }
    }

    Ok(())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
