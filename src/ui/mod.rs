pub mod blocks;
pub mod components;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod translate;
pub mod views;
pub mod widgets;
pub mod wrap;
