//! Static name-reconciliation tables
//!
//! The wiki's anchor identifiers are human-edited and drift from the game's
//! canonical identifiers. `WIKI_ALIASES` translates the known mismatches;
//! `IMAGE_OVERRIDES` pins images for components the wiki reconciliation
//! cannot resolve.

/// Normalized wiki anchor name -> canonical definition identifier
pub const WIKI_ALIASES: &[(&str, &str)] = &[
    ("window_1x1_inverted_pyramid", "window_1x1_inv_pyramid"),
    ("window_large_(3x3)", "window_large"),
    ("window_narrow_(1x3)", "window_narrow"),
    ("window_large_angled", "window_large_angle"),
    ("window_narrow_angled", "window_narrow_angle"),
    ("window_large_corner", "window_corner_2"),
    ("window_small_angled", "window_small_angle"),
    ("wheel_3x3_suspension", "wheel_advanced_3_sus"),
    ("wheel_5x5_suspension", "wheel_advanced_5_sus"),
    ("wheel_7x7_suspension", "wheel_advanced_7_sus"),
    ("wheel_9x9_suspension", "wheel_advanced_9_sus"),
    ("tank_wheel_large", "wheel_tank_7"),
    ("tank_wheel_medium", "wheel_tank_5"),
    ("tank_wheel_small", "wheel_tank_1"),
    ("tank_drive_wheel_large", "wheel_tank_drive_7"),
    ("tank_drive_wheel_medium", "wheel_tank_drive_5"),
    ("tank_drive_wheel_small", "wheel_tank_drive_1"),
    ("wing_front_section", "wing_small_front"),
    ("linear_track_base_small", "linear_compact_base"),
    ("linear_track_extension_small", "linear_compact_module"),
    ("magnet", "magall"),
    ("piston", "linear_matic_a"),
    ("robotic_pivot_power", "multibody_robotic_pivot_01_a"),
    ("robotic_pivot_fluid", "multibody_robotic_pivot_01_a_fluid"),
    ("winch_small", "rope_hook_winch"),
    ("winch_large", "rope_hook_winch_large"),
    ("jet_intake_small", "jet_engine_intake_small"),
    ("jet_intake_medium", "jet_engine_intake_large"),
    ("jet_duct_t-piece", "jet_engine_duct_t"),
    ("jet_duct_corner", "jet_engine_duct_angle"),
    ("jet_exhaust_basic", "jet_engine_exhaust_basic"),
    ("gearbox", "torque_gearbox"),
    ("rotor_heavy", "rotor_coaxial_prop_end"),
    ("ducted_fan_small", "fan_small"),
    ("ducted_fan_large", "fan_large"),
    ("propeller_small", "propeller"),
    ("propeller_large", "large_propeller"),
    ("propeller_giant", "giga_prop_small"),
    ("solid_rocket_booster_huge", "solid_rocket_nozzle_huge"),
    ("solid_rocket_booster_large", "solid_rocket_nozzle_large"),
    ("solid_rocket_booster_medium", "solid_rocket_nozzle_medium"),
    ("solid_rocket_booster_small", "solid_rocket_nozzle_small"),
    ("solid_rocket_fuel_huge", "solid_rocket_huge"),
    ("solid_rocket_fuel_large", "solid_rocket_large"),
    ("solid_rocket_fuel_medium", "solid_rocket_medium"),
    ("solid_rocket_fuel_small", "solid_rocket_small"),
    ("train_wheel_assembly", "train_wheels"),
    ("outfit_inventory_scuba", "inventory_outfit_scuba"),
    ("outfit_inventory_diving", "inventory_outfit_diving"),
    ("outfit_inventory_parachute", "inventory_outfit_parachute"),
    ("outfit_inventory_firefighter", "inventory_outfit_firefighter"),
    ("outfit_inventory_arctic", "inventory_outfit_arctic"),
    ("outfit_inventory_empty", "inventory_outfit"),
    ("pipe_t-piece", "trans_t"),
    ("pipe_t-pice_corner", "trans_t_corner"),
    ("enclosed_pipe_straight", "trans_block_straight"),
    ("enclosed_pipe_angle", "trans_block_angle"),
    ("enclosed_pipe_t-piece", "trans_block_t"),
    ("enclosed_pipe_t-pice_corner", "trans_block_t_corner"),
    ("enclosed_pipe_cross", "trans_block_cross"),
    ("enclosed_pipe_cross_corner", "trans_block_cross_corner"),
    ("enclosed_pipe_omni", "trans_block_omni"),
    ("tank_small", "fluid_tank_small"),
    ("tank_medium", "fluid_tank_medium"),
    ("tank_large", "fluid_tank_large"),
    ("fluid_valve_on/off", "fluid_valve_on_off"),
    ("fluid_flow_valve_(directional)", "fluid_valve_flow"),
    ("fluid_pump_large", "water_pump_large"),
    ("hose", "water_hose"),
    ("anchor_fluid_hose", "rope_hook_fluid"),
    ("constant_on", "gate_bool_constant"),
    ("function_(3_input)", "gate_function_large"),
    ("memory", "gate_float_register"),
    ("keypad_small", "button_keypad_small"),
    ("keypad_large", "button_keypad_large"),
    ("pilot_seat_compact", "seat_compact"),
    ("anchor_electrical_cable", "rope_hook_composite"),
    ("artifical_horizon", "artificial_horizon"),
    ("speaker_small", "speaker"),
    ("megaphone_speaker_small", "speaker_medium"),
    ("megaphone_speaker_large", "speaker_large"),
    ("temperature_sensor", "temperature_probe"),
    ("gps", "gps_sensor"),
    ("sonar", "radar_sonar_small"),
    ("railing_corner", "railing_segment_corner"),
    ("railing_corner_diagonal", "railing_segment_corner_diag"),
    ("railing_curve", "railing_segment_curve"),
    ("railing_end", "railing_segment_end"),
    ("railing_end_diagonal", "railing_segment_end_diag"),
    ("railing_straight", "railing_segment_extension"),
    ("railing_straight_diagonal", "railing_segment_extension_diag"),
    ("railing_incline", "railing_segment_angle"),
    ("railing_middle", "railing_segment_middle"),
    ("railing_middle_diagonal", "railing_segment_middle_diag"),
    ("anchor_rope", "rope_hook"),
    ("hud_1x1", "monitor_hud_1"),
    ("hud_3x3", "monitor_hud_3"),
    ("monitor_3x5", "monitor_5"),
];

/// Origin the override image paths resolve against
pub const OVERRIDE_IMAGE_BASE: &str = "https://stormworks.fandom.com";

/// Canonical identifier -> image path, applied after wiki reconciliation
/// and always winning over any scraped match
pub const IMAGE_OVERRIDES: &[(&str, &str)] = &[
    ("large_rotor", "/wiki/Special:FilePath/Large_Rotor.png"),
    ("medium_rotor", "/wiki/Special:FilePath/Medium_Rotor.png"),
    ("small_rotor", "/wiki/Special:FilePath/Small_Rotor.png"),
];

/// Translate a normalized wiki name to its canonical identifier
pub fn canonical_id(name: &str) -> Option<&'static str> {
    WIKI_ALIASES
        .iter()
        .find(|(wiki, _)| *wiki == name)
        .map(|(_, id)| *id)
}

/// Full override URL for an identifier, if one is pinned
pub fn override_url(id: &str) -> Option<String> {
    IMAGE_OVERRIDES
        .iter()
        .find(|(game, _)| *game == id)
        .map(|(_, path)| format!("{}{}", OVERRIDE_IMAGE_BASE, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_id_known_alias() {
        assert_eq!(
            canonical_id("window_1x1_inverted_pyramid"),
            Some("window_1x1_inv_pyramid")
        );
        assert_eq!(canonical_id("monitor_3x5"), Some("monitor_5"));
    }

    #[test]
    fn test_canonical_id_unknown_name() {
        assert_eq!(canonical_id("window_1x1_inv_pyramid"), None);
        assert_eq!(canonical_id(""), None);
    }

    #[test]
    fn test_no_duplicate_alias_keys() {
        let mut seen = HashSet::new();
        for (wiki, _) in WIKI_ALIASES {
            assert!(seen.insert(wiki), "duplicate alias key: {}", wiki);
        }
    }

    #[test]
    fn test_override_url() {
        let url = override_url("large_rotor").unwrap();
        assert_eq!(
            url,
            "https://stormworks.fandom.com/wiki/Special:FilePath/Large_Rotor.png"
        );
        assert_eq!(override_url("not_overridden"), None);
    }
}
