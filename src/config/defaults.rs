//! Default value functions for serde deserialization.

pub fn wheelbase() -> f64 {
    106.3
}

pub fn track() -> f64 {
    60.6
}

pub fn body_length() -> f64 {
    184.8
}

pub fn body_width() -> f64 {
    73.5
}

pub fn front_overhang() -> f64 {
    37.2
}

pub fn rear_overhang() -> f64 {
    41.3
}

pub fn wheel_length() -> f64 {
    27.0
}

pub fn wheel_width() -> f64 {
    9.2
}

pub fn max_steer_deg() -> f64 {
    32.5
}

pub fn min_amount() -> u32 {
    800
}

pub fn max_amount() -> u32 {
    3000
}

pub fn car_multiplier() -> u32 {
    2
}

pub fn contact_hysteresis() -> f64 {
    1.0
}
