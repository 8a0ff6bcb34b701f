#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = budget_ui::run() {
        eprintln!("Budget failed: {err}");
        std::process::exit(1);
    }
}
