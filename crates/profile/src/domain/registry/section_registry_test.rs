#[cfg(test)]
mod tests {
    use crate::domain::registry::{
        resolve_component, resolve_platform, SectionComponent, SectionDescriptor, SectionRegistry,
    };
    use crate::domain::value_objects::{CardVariant, EmbedPlatform, PlatformId, ProfileFieldName};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Sortie des traces conservée en mémoire pour inspection
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_common_sections_resolve_in_both_variants() {
        for variant in CardVariant::ALL {
            assert_eq!(resolve_component("faq", variant), Some(SectionComponent::Faq));
            assert_eq!(resolve_component("experience", variant), Some(SectionComponent::Experience));
            assert_eq!(
                resolve_component("github_highlights", variant),
                Some(SectionComponent::Highlights(EmbedPlatform::Github))
            );
        }
    }

    #[test]
    fn test_variants_expose_distinct_sets() {
        assert_eq!(resolve_component("phone", CardVariant::Pro), Some(SectionComponent::Phone));
        assert_eq!(resolve_component("phone", CardVariant::Basic), None);

        assert_eq!(resolve_component("featured_video", CardVariant::Pro), None);
        assert_eq!(
            resolve_component("featured_video", CardVariant::Basic),
            Some(SectionComponent::FeaturedVideo)
        );
        assert_eq!(resolve_component("publications", CardVariant::Pro), None);
    }

    #[test]
    fn test_unknown_type_renders_nothing() {
        assert_eq!(resolve_component("myspace", CardVariant::Pro), None);
        assert_eq!(resolve_component("", CardVariant::Basic), None);
        assert_eq!(resolve_component("FAQ", CardVariant::Basic), None);
    }

    #[test]
    fn test_unknown_type_emits_warning() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        let component = tracing::subscriber::with_default(subscriber, || {
            resolve_component("myspace", CardVariant::Pro)
        });

        assert_eq!(component, None);
        let output = logs.contents();
        assert!(output.contains("WARN"), "FAIL: no warning emitted: {output}");
        assert!(output.contains("No component registered for section type"));
        assert!(output.contains("myspace"));
    }

    #[test]
    fn test_known_type_stays_silent() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!(resolve_component("bio", CardVariant::Basic).is_some());
        });

        assert!(logs.contents().is_empty());
    }

    #[test]
    fn test_resolve_platform() {
        assert_eq!(resolve_platform("whatsapp"), Some(PlatformId::Whatsapp));
        assert_eq!(resolve_platform("x"), Some(PlatformId::X));
        assert_eq!(resolve_platform("twitter"), None);
        assert_eq!(resolve_platform("website"), None);
    }

    #[test]
    fn test_resolve_all_skips_retired_sections() {
        let sections = vec![
            SectionDescriptor::new("bio", "s1"),
            SectionDescriptor::new("retired_widget", "s2"),
            SectionDescriptor::new("phone", "s3"),
        ];

        let resolved = SectionRegistry::global().resolve_all(&sections, CardVariant::Basic);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0.id, "s1");
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let raw = serde_json::json!({"type": "skills", "id": "abc", "editorComponent": "SkillsSelector"});
        let section: SectionDescriptor = serde_json::from_value(raw).unwrap();

        assert_eq!(section.section_type, "skills");
        assert_eq!(section.editor_component.as_deref(), Some("SkillsSelector"));
        assert!(section.input_type.is_none());
    }

    #[test]
    fn test_component_metadata() {
        assert_eq!(
            SectionComponent::Highlights(EmbedPlatform::Tiktok).backing_field(),
            Some(ProfileFieldName::TiktokHighlights)
        );
        assert_eq!(SectionComponent::Faq.backing_field(), None);
        assert_eq!(
            SectionComponent::SocialLink(PlatformId::Reddit).platform(),
            Some(PlatformId::Reddit)
        );

        let registry = SectionRegistry::global();
        assert!(registry.section_types(CardVariant::Pro).contains(&"phone"));
        assert!(!registry.section_types(CardVariant::Basic).contains(&"phone"));
    }
}
