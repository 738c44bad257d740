
mod driver;
