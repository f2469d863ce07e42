pub mod assets;
pub mod m3u_api;
pub mod v1_api;
pub mod web_index;
