#![allow(dead_code)]
// Shared scripted randomness for host-side tests.

use rand::RngCore;

/// Replays a fixed list of `f64` draws in [0, 1), cycling when exhausted.
///
/// Values must be exactly representable with 53 fractional bits (any
/// dyadic fraction such as 0.25 or 0.875 is) so `gen::<f64>()` returns
/// them unchanged.
pub struct ScriptedRng {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty());
        assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(&[value])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        // rand maps the top 53 bits of a u64 onto [0, 1)
        ((v * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
