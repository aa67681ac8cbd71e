use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{grayscale::MandelbrotGrayscale, phase_shifted::MandelbrotPhaseShifted},
};

/// Builds the colour map for `kind`, normalising against `max_value`.
#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_value: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::Grayscale => Box::new(MandelbrotGrayscale::new(max_value)),
        MandelbrotColourMapKinds::PhaseShifted => Box::new(MandelbrotPhaseShifted::new(max_value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 100);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 100);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn keys_resolve_back_to_their_kind() {
        for &kind in MandelbrotColourMapKinds::ALL {
            assert_eq!(MandelbrotColourMapKinds::from_key(kind.key()), Some(kind));
        }
        assert_eq!(MandelbrotColourMapKinds::from_key("fire"), None);
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = MandelbrotColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
