pub fn safe_usize_to_f32(value: usize) -> f32 {
    let clamped = value.min(u32::MAX as usize);
    let as_u32 = u32::try_from(clamped).unwrap_or(u32::MAX);
    #[allow(clippy::cast_precision_loss)]
    {
        as_u32 as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates_instead_of_wrapping() {
        assert!((safe_usize_to_f32(640) - 640.0).abs() < f32::EPSILON);
        assert!(safe_usize_to_f32(usize::MAX) >= 4.0e9);
    }
}
