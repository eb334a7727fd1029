/// Refuses to restart the model animation while a previous play is still
/// running, plus a fixed cooldown after it ends.
#[derive(Clone, Debug)]
pub struct AnimationGate {
    cooldown_sec: f64,
    busy_until: Option<f64>,
}

impl AnimationGate {
    pub fn new(cooldown_sec: f64) -> Self {
        Self {
            cooldown_sec: cooldown_sec.max(0.0),
            busy_until: None,
        }
    }

    pub fn is_ready(&self, now_sec: f64) -> bool {
        self.busy_until.map_or(true, |until| now_sec >= until)
    }

    /// Start a play of `duration_sec` if the gate is open.
    pub fn try_start(&mut self, now_sec: f64, duration_sec: f64) -> bool {
        if !self.is_ready(now_sec) {
            return false;
        }
        self.busy_until = Some(now_sec + duration_sec.max(0.0) + self.cooldown_sec);
        true
    }
}

/// All clips play together, but the gate waits for them back to back.
pub fn total_clip_duration(clip_durations: &[f32]) -> f32 {
    clip_durations.iter().copied().filter(|d| d.is_finite()).sum()
}
