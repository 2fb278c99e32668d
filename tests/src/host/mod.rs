mod identity;
mod run_time;
