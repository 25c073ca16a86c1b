pub const GUESS_DIR: &str = "initial_guess";

pub fn relativity() -> String {
    "none".to_string()
}

pub fn environment() -> String {
    "none".to_string()
}

pub fn nuclear_model() -> String {
    "point_like".to_string()
}

pub fn kinetic_derivative() -> String {
    "abgv_55".to_string()
}

pub fn checkpoint_dir() -> String {
    "checkpoint".to_string()
}

pub fn enabled() -> bool {
    true
}
