use super::{Dispersivity, TransportParameters};

/// Reference scenario; its plume ends at x = 1522.
pub(super) fn reference() -> TransportParameters {
    TransportParameters::default()
}

/// Fast, weakly decaying plume whose centerline stays above the threshold
/// for the full step cap.
pub(super) fn never_crossing() -> TransportParameters {
    TransportParameters {
        threshold: 1e-6,
        time: 1e4,
        source_thickness: 5.0,
        source_concentration: 100.0,
        source_width: 10.0,
        velocity: 100.0,
        dispersivity: Dispersivity {
            longitudinal: 100.0,
            horizontal: 0.5,
            vertical: 0.05,
        },
        diffusion: 0.0,
        retardation: 1.0,
        source_decay: 0.0,
        decay: 0.0,
        quadrature_order: 60,
    }
}
