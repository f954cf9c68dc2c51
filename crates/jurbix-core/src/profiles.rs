//! Content profiles and their threshold sets.
//!
//! A [`ContentProfile`] bundles a complete [`ThresholdConfig`] tuned to a text
//! genre. Named profiles are derived from the default by struct update, so
//! every profile defines every threshold. Custom profiles are built by
//! shallow-merging a [`ThresholdOverrides`] onto a base profile.
//!
//! Lookups never fail: an unknown id resolves to the default profile.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Id of the profile every lookup falls back to.
pub const DEFAULT_PROFILE_ID: &str = "default";

/// Declares [`ThresholdConfig`] and its all-optional mirror
/// [`ThresholdOverrides`] from one field list.
macro_rules! thresholds {
    ($( $(#[$doc:meta])* $field:ident : $ty:ty ),+ $(,)?) => {
        /// Named numeric thresholds consulted by profile-aware judgments.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
        pub struct ThresholdConfig {
            $( $(#[$doc])* pub $field: $ty, )+
        }

        /// Partial thresholds; `Some` fields replace the base value.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
        #[serde(default)]
        pub struct ThresholdOverrides {
            $( $(#[$doc])* #[serde(skip_serializing_if = "Option::is_none")] pub $field: Option<$ty>, )+
        }

        impl ThresholdConfig {
            /// Shallow-merge `overrides` onto a copy of `self`.
            pub fn merged(&self, overrides: &ThresholdOverrides) -> Self {
                Self {
                    $( $field: overrides.$field.unwrap_or(self.$field), )+
                }
            }
        }
    };
}

thresholds! {
    /// Minimum Flesch Reading Ease.
    min_flesch_ease: f64,
    /// Maximum Gunning Fog index.
    max_gunning_fog: f64,
    /// Maximum SMOG grade.
    max_smog: f64,
    /// Maximum Coleman-Liau index.
    max_coleman_liau: f64,
    /// Minimum Gulpease index.
    min_gulpease: f64,
    /// Minimum JurbiX score.
    min_jurbix: f64,
    /// Minimum word count.
    min_word_count: usize,
    /// Maximum word count.
    max_word_count: usize,
    /// Maximum average words per sentence.
    max_words_per_sentence: f64,
    /// Maximum average words per paragraph.
    max_words_per_paragraph: f64,
    /// Maximum redundancy index (%).
    max_redundancy_percent: f64,
    /// Minimum sentiment compound score.
    min_sentiment_compound: f64,
    /// Maximum share of passive sentences (%).
    max_passive_voice_percent: f64,
    /// Maximum share of adverbs (%).
    max_adverb_percent: f64,
    /// Maximum share of complex sentences (%).
    max_complex_sentence_percent: f64,
    /// Minimum share of discourse connectors (%).
    min_connector_percent: f64,
    /// Maximum share of discourse connectors (%).
    max_connector_percent: f64,
    /// Minimum acceptable lexical diversity (Shannon, bits).
    min_lexical_diversity: f64,
    /// Lexical diversity considered good (Shannon, bits).
    good_lexical_diversity: f64,
    /// Minimum overall accessibility score.
    min_accessibility_score: f64,
    /// Minimum cognitive accessibility score.
    min_cognitive_score: f64,
    /// Minimum visual accessibility score.
    min_visual_score: f64,
    /// Minimum linguistic accessibility score.
    min_linguistic_score: f64,
    /// Minimum main-keyword density (%).
    min_keyword_density: f64,
    /// Maximum main-keyword density (%).
    max_keyword_density: f64,
    /// Minimum LSI density (%).
    min_lsi_density: f64,
    /// Maximum LSI density (%).
    max_lsi_density: f64,
    /// Minimum number of detected headings.
    min_headings: usize,
    /// Lower bound of the SEO-friendly Flesch window.
    seo_min_flesch: f64,
    /// Upper bound of the SEO-friendly Flesch window.
    seo_max_flesch: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            min_flesch_ease: 50.0,
            max_gunning_fog: 12.0,
            max_smog: 12.0,
            max_coleman_liau: 12.0,
            min_gulpease: 50.0,
            min_jurbix: 60.0,
            min_word_count: 300,
            max_word_count: 2000,
            max_words_per_sentence: 20.0,
            max_words_per_paragraph: 150.0,
            max_redundancy_percent: 30.0,
            min_sentiment_compound: -0.05,
            max_passive_voice_percent: 5.0,
            max_adverb_percent: 4.0,
            max_complex_sentence_percent: 15.0,
            min_connector_percent: 2.0,
            max_connector_percent: 8.0,
            min_lexical_diversity: 2.5,
            good_lexical_diversity: 3.5,
            min_accessibility_score: 70.0,
            min_cognitive_score: 70.0,
            min_visual_score: 70.0,
            min_linguistic_score: 70.0,
            min_keyword_density: 1.0,
            max_keyword_density: 2.5,
            min_lsi_density: 1.0,
            max_lsi_density: 2.0,
            min_headings: 1,
            seo_min_flesch: 60.0,
            seo_max_flesch: 90.0,
        }
    }
}

/// A named threshold set for one text genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContentProfile {
    /// Stable identifier used for lookup and persistence.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Complete threshold set.
    pub thresholds: ThresholdConfig,
}

/// A custom profile declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDefinition {
    /// Id of the profile to start from. Defaults to `default`.
    pub based_on: Option<String>,
    /// Display name. Defaults to the profile id.
    pub name: Option<String>,
    /// One-line description.
    pub description: Option<String>,
    /// Thresholds that replace the base values.
    pub thresholds: ThresholdOverrides,
}

/// Derive a new profile from `based_on`, replacing the thresholds set in
/// `overrides`.
pub fn create_custom_profile(
    based_on: &ContentProfile,
    id: impl Into<String>,
    name: impl Into<String>,
    overrides: &ThresholdOverrides,
) -> ContentProfile {
    ContentProfile {
        id: id.into(),
        name: name.into(),
        description: format!("Personalizado a partir de {}", based_on.name),
        thresholds: based_on.thresholds.merged(overrides),
    }
}

fn builtin_profiles() -> Vec<ContentProfile> {
    let base = ThresholdConfig::default();

    vec![
        ContentProfile {
            id: DEFAULT_PROFILE_ID.to_string(),
            name: "Padrão".to_string(),
            description: "Limites equilibrados para textos de uso geral.".to_string(),
            thresholds: base.clone(),
        },
        ContentProfile {
            id: "blog".to_string(),
            name: "Blog".to_string(),
            description: "Artigos de blog: leitura leve, boa estrutura e tamanho médio."
                .to_string(),
            thresholds: ThresholdConfig {
                min_flesch_ease: 60.0,
                max_gunning_fog: 10.0,
                min_jurbix: 65.0,
                min_word_count: 600,
                max_word_count: 2500,
                max_words_per_sentence: 18.0,
                min_headings: 2,
                ..base.clone()
            },
        },
        ContentProfile {
            id: "relatorio-formal".to_string(),
            name: "Relatório formal".to_string(),
            description: "Relatórios e textos acadêmicos: tolera frases longas e voz passiva."
                .to_string(),
            thresholds: ThresholdConfig {
                min_flesch_ease: 30.0,
                max_gunning_fog: 16.0,
                max_smog: 16.0,
                max_coleman_liau: 16.0,
                min_gulpease: 40.0,
                min_jurbix: 45.0,
                min_word_count: 500,
                max_word_count: 10_000,
                max_words_per_sentence: 30.0,
                max_words_per_paragraph: 200.0,
                max_passive_voice_percent: 15.0,
                max_adverb_percent: 3.0,
                max_complex_sentence_percent: 30.0,
                min_sentiment_compound: -1.0,
                min_headings: 3,
                ..base.clone()
            },
        },
        ContentProfile {
            id: "redes-sociais".to_string(),
            name: "Redes sociais".to_string(),
            description: "Posts curtos e diretos, com tom positivo.".to_string(),
            thresholds: ThresholdConfig {
                min_flesch_ease: 70.0,
                max_gunning_fog: 8.0,
                max_smog: 8.0,
                max_coleman_liau: 8.0,
                min_gulpease: 60.0,
                min_jurbix: 70.0,
                min_word_count: 10,
                max_word_count: 300,
                max_words_per_sentence: 15.0,
                max_words_per_paragraph: 60.0,
                max_adverb_percent: 6.0,
                max_complex_sentence_percent: 5.0,
                min_sentiment_compound: 0.0,
                min_headings: 0,
                ..base.clone()
            },
        },
        ContentProfile {
            id: "marketing".to_string(),
            name: "Marketing".to_string(),
            description: "Textos persuasivos: voz ativa, tom positivo e foco na palavra-chave."
                .to_string(),
            thresholds: ThresholdConfig {
                min_flesch_ease: 60.0,
                max_gunning_fog: 10.0,
                min_jurbix: 65.0,
                max_word_count: 1500,
                max_words_per_sentence: 18.0,
                max_passive_voice_percent: 3.0,
                max_adverb_percent: 3.0,
                min_sentiment_compound: 0.05,
                min_keyword_density: 1.5,
                max_keyword_density: 3.0,
                ..base
            },
        },
    ]
}

/// Read-only collection of content profiles.
///
/// The default profile is always present and always first.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<ContentProfile>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfileStore {
    /// The built-in profiles: default, blog, formal report, social media, marketing.
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    /// Register custom profiles declared in configuration.
    ///
    /// Definitions are applied in id order so a custom profile can build on
    /// another custom profile that sorts earlier. A definition whose id
    /// matches an existing profile replaces it, except for the default.
    pub fn with_definitions<'a, I>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a ProfileDefinition)>,
    {
        let mut defs: Vec<_> = definitions.into_iter().collect();
        defs.sort_by(|a, b| a.0.cmp(b.0));

        for (id, def) in defs {
            if id == DEFAULT_PROFILE_ID {
                tracing::warn!(id = %id, "ignoring custom profile that shadows the default");
                continue;
            }
            let base = self.get_profile_by_id(def.based_on.as_deref().unwrap_or(DEFAULT_PROFILE_ID));
            let mut profile = create_custom_profile(
                base,
                id.clone(),
                def.name.clone().unwrap_or_else(|| id.clone()),
                &def.thresholds,
            );
            if let Some(ref description) = def.description {
                profile.description.clone_from(description);
            }
            tracing::debug!(id = %id, based_on = ?def.based_on, "registered custom profile");
            self.insert(profile);
        }
        self
    }

    /// Add or replace a profile by id.
    pub fn insert(&mut self, profile: ContentProfile) {
        if let Some(existing) = self.profiles.iter_mut().find(|p| p.id == profile.id) {
            *existing = profile;
        } else {
            self.profiles.push(profile);
        }
    }

    /// Look up a profile, falling back to the default for unknown ids.
    pub fn get_profile_by_id(&self, id: &str) -> &ContentProfile {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| self.default_profile())
    }

    /// The default profile.
    pub fn default_profile(&self) -> &ContentProfile {
        &self.profiles[0]
    }

    /// Whether a profile with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.profiles.iter().any(|p| p.id == id)
    }

    /// All profiles, default first.
    pub fn profiles(&self) -> &[ContentProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn unknown_id_falls_back_to_default() {
        let store = ProfileStore::builtin();
        let unknown = store.get_profile_by_id("nonexistent-id");
        let default = store.get_profile_by_id("default");
        assert!(std::ptr::eq(unknown, default));
    }

    #[test]
    fn named_profiles_exist() {
        let store = ProfileStore::builtin();
        for id in ["default", "blog", "relatorio-formal", "redes-sociais", "marketing"] {
            assert!(store.contains(id), "missing profile {id}");
            assert_eq!(store.get_profile_by_id(id).id, id);
        }
    }

    #[test]
    fn named_profiles_inherit_unset_thresholds() {
        let store = ProfileStore::builtin();
        let blog = &store.get_profile_by_id("blog").thresholds;
        let default = &store.default_profile().thresholds;
        assert_eq!(blog.max_passive_voice_percent, default.max_passive_voice_percent);
        assert_ne!(blog.min_word_count, default.min_word_count);
    }

    #[test]
    fn custom_profile_merges_shallowly() {
        let store = ProfileStore::builtin();
        let base = store.get_profile_by_id("blog");
        let overrides = ThresholdOverrides {
            max_passive_voice_percent: Some(20.0),
            ..Default::default()
        };
        let custom = create_custom_profile(base, "meu-blog", "Meu blog", &overrides);
        assert_eq!(custom.thresholds.max_passive_voice_percent, 20.0);
        assert_eq!(custom.thresholds.min_word_count, base.thresholds.min_word_count);
        assert_eq!(custom.id, "meu-blog");
    }

    #[test]
    fn empty_overrides_are_identity() {
        let base = ThresholdConfig::default();
        assert_eq!(base.merged(&ThresholdOverrides::default()), base);
    }

    #[test]
    fn definitions_register_profiles() {
        let mut defs = HashMap::new();
        defs.insert(
            "newsletter".to_string(),
            ProfileDefinition {
                based_on: Some("marketing".to_string()),
                name: Some("Newsletter".to_string()),
                description: None,
                thresholds: ThresholdOverrides {
                    max_word_count: Some(800),
                    ..Default::default()
                },
            },
        );
        let store = ProfileStore::builtin().with_definitions(&defs);
        let p = store.get_profile_by_id("newsletter");
        assert_eq!(p.name, "Newsletter");
        assert_eq!(p.thresholds.max_word_count, 800);
        assert_eq!(p.thresholds.max_passive_voice_percent, 3.0);
    }

    #[test]
    fn definitions_cannot_replace_default() {
        let mut defs = HashMap::new();
        defs.insert(
            "default".to_string(),
            ProfileDefinition {
                thresholds: ThresholdOverrides {
                    min_jurbix: Some(1.0),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        let store = ProfileStore::builtin().with_definitions(&defs);
        assert_eq!(store.default_profile().thresholds.min_jurbix, 60.0);
    }

    #[test]
    fn overrides_deserialize_partially() {
        let overrides: ThresholdOverrides =
            serde_json::from_str(r#"{"max_adverb_percent": 1.5}"#).unwrap();
        assert_eq!(overrides.max_adverb_percent, Some(1.5));
        assert!(overrides.min_jurbix.is_none());
    }
}
