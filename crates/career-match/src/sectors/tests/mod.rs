mod catalog;
mod common;
mod ranking;
