//! Validation for value ranges and references inside the player config.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a numeric field against a predicate
macro_rules! check {
    ($errors:expr, $section:expr, $field:expr, $ok:expr, $message:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: $field.to_string(),
                message: $message.to_string(),
            });
        }
    };
}

/// Validate the loaded config.
/// Returns a list of validation errors, empty if the config is usable as is.
pub fn validate_player_config(config: &PlayerConfigDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.schema_version != CURRENT_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "config",
            field: "schema_version".to_string(),
            message: format!(
                "expected {}, found {}",
                CURRENT_SCHEMA_VERSION, config.schema_version
            ),
        });
    }

    let movement = &config.movement;
    check!(errors, "movement", "move_speed", movement.move_speed >= 0.0, "must not be negative");
    check!(errors, "movement", "jump_force", movement.jump_force > 0.0, "must be positive");
    check!(errors, "movement", "gravity", movement.gravity > 0.0, "must be positive");
    check!(errors, "movement", "coyote_time", movement.coyote_time >= 0.0, "must not be negative");
    check!(
        errors,
        "movement",
        "fall_multiplier",
        movement.fall_multiplier >= 1.0,
        "below 1 would slow falls"
    );
    check!(
        errors,
        "movement",
        "low_jump_multiplier",
        movement.low_jump_multiplier >= 1.0,
        "below 1 would lengthen short hops"
    );

    let attack = &config.attack;
    check!(errors, "attack", "cooldown", attack.cooldown >= 0.0, "must not be negative");
    check!(
        errors,
        "attack",
        "freeze_duration",
        attack.freeze_duration >= 0.0,
        "must not be negative"
    );
    check!(
        errors,
        "attack",
        "invincibility_duration",
        attack.invincibility_duration >= 0.0,
        "must not be negative"
    );
    if let Some(projectile) = &attack.projectile {
        check!(errors, "attack", "projectile.speed", projectile.speed > 0.0, "must be positive");
        check!(
            errors,
            "attack",
            "projectile.lifetime",
            projectile.lifetime > 0.0,
            "must be positive"
        );
    }

    let vitality = &config.vitality;
    check!(errors, "vitality", "max_health", vitality.max_health > 0.0, "must be positive");
    check!(errors, "vitality", "frame_count", vitality.frame_count > 0, "needs at least one frame");
    check!(
        errors,
        "vitality",
        "light_min",
        vitality.light_min <= vitality.light_max,
        "must not exceed light_max"
    );

    let smoothing = &config.smoothing;
    check!(
        errors,
        "smoothing",
        "light_transition_time",
        smoothing.light_transition_time >= 0.0,
        "must not be negative"
    );
    check!(
        errors,
        "smoothing",
        "health_bar_transition_time",
        smoothing.health_bar_transition_time >= 0.0,
        "must not be negative"
    );
    check!(
        errors,
        "smoothing",
        "death_fade_time",
        smoothing.death_fade_time >= 0.0,
        "must not be negative"
    );

    let ambient = &config.ambient;
    let profile_defined = |name: &str| {
        name.eq_ignore_ascii_case(crate::ambient::DEFAULT_PROFILE_ALIAS)
            || ambient.profiles.iter().any(|profile| profile.name == name)
    };
    check!(
        errors,
        "ambient",
        "default_profile",
        profile_defined(&ambient.default_profile),
        format!("'{}' has no profile definition", ambient.default_profile)
    );
    check!(
        errors,
        "ambient",
        "crossfade_time",
        ambient.crossfade_time >= 0.0,
        "must not be negative"
    );

    for (index, collectible) in config.sandbox.collectibles.iter().enumerate() {
        if let Some(profile) = &collectible.ambient_profile {
            check!(
                errors,
                "sandbox",
                format!("collectibles[{}].ambient_profile", index),
                profile_defined(profile),
                format!("'{}' has no profile definition", profile)
            );
        }
    }

    errors
}
