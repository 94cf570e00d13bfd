use iced::widget::canvas::{Frame, Path};
use nebula_core::ParticleStore;

use crate::theme::{to_color, to_point};

/// One filled disc per live particle.
pub fn draw_particles(frame: &mut Frame, store: &ParticleStore) {
    for particle in store.particles() {
        frame.fill(
            &Path::circle(to_point(particle.position), particle.radius),
            to_color(particle.color),
        );
    }
}
