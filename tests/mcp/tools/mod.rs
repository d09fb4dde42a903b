mod config;
mod entries;
mod lookup;
