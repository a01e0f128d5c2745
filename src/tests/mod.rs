#[macro_use]
mod util;

mod editor;
mod render;
