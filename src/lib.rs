pub mod animation;
pub mod config;
pub mod constants;
pub mod fullscreen;
pub mod input;
pub mod layout;
pub mod palette;
pub mod render_loop;
pub mod shapes;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod web;
