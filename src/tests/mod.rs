mod property;
mod unit;
