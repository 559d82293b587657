use std::ops::{Add, Mul};

pub fn calc_total<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn calc_mult<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}
