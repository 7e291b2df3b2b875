/// Pokemon Center holding queue
pub mod pokemon_center;
