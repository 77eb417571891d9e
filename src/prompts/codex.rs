use std::path::Path;

use super::RenderedPrompt;
use crate::core::sources::{
    read_source, CodeFiles, APP_COMPONENT, APP_STYLESHEET, LIQUID_MORPHING, LIQUID_PARTICLES,
};

const STYLESHEET_EXCERPT: usize = 3000;
const APP_EXCERPT: usize = 2000;

pub const NO_CODE_FILES: &str = "Aucun fichier fourni";

pub const SYSTEM_PROMPT: &str = "Tu es GPT-5 Codex, l'IA de programmation la plus avancée au monde. Tu excelles dans:

🚀 EXPERTISE TECHNIQUE:
- React 19 + TypeScript + Vite optimisations
- Animations CSS/JS haute performance (60fps+)
- WebGL/Canvas pour effets visuels avancés
- Architecture moderne (hooks, context, state management)
- Performance web (Core Web Vitals, lighthouse 100/100)

🎨 DESIGN SYSTEMS PREMIUM:
- Esthétique Apple (liquid glass, nacré, iridescent)
- Animations fluides et organiques
- Micro-interactions sophistiquées
- Responsive design parfait

⚡ OPTIMISATIONS AVANCÉES:
- GPU acceleration (transform3d, will-change)
- Memory management (cleanup, garbage collection)
- Bundle splitting et lazy loading
- Web Workers pour calculs intensifs

🧠 INTELLIGENCE ORCHESTRÉE:
- Intégration IA (OpenAI, Anthropic, Supabase)
- Command Palette intelligente
- Adaptabilité temps réel
- Apprentissage des préférences utilisateur

Fournis du code production-ready avec explications détaillées.";

pub fn render(context: &str, code_files: Option<&str>, request: &str) -> RenderedPrompt {
    let code_files = code_files.unwrap_or(NO_CODE_FILES);
    let user = format!(
        "
PROJET: WiseWords-AI Hub - Site vitrine révolutionnaire
OBJECTIF: Première démonstration mondiale d'Intelligence Orchestrée

CONTEXTE TECHNIQUE:
{context}

FICHIERS DE CODE:
{code_files}

DEMANDE SPÉCIFIQUE:
{request}

Génère du code optimisé, moderne et innovant avec:
1. Performance maximale (60fps, <100ms)
2. Accessibilité complète (WCAG 2.1 AA)
3. Design premium (Apple-like)
4. Architecture scalable
5. Commentaires explicatifs
"
    );

    RenderedPrompt {
        system: Some(SYSTEM_PROMPT.to_string()),
        user,
    }
}

pub fn liquid_animations(root: &Path) -> RenderedPrompt {
    let mut files = CodeFiles::new();
    files.insert("LiquidParticles.jsx", read_source(root, LIQUID_PARTICLES, None));
    files.insert("LiquidMorphing.jsx", read_source(root, LIQUID_MORPHING, None));
    files.insert(
        "App.css",
        read_source(root, APP_STYLESHEET, Some(STYLESHEET_EXCERPT)),
    );

    render(
        LIQUID_ANIMATIONS_CONTEXT,
        Some(&files.to_pretty_json()),
        LIQUID_ANIMATIONS_REQUEST,
    )
}

pub fn command_palette() -> RenderedPrompt {
    render(COMMAND_PALETTE_CONTEXT, None, COMMAND_PALETTE_REQUEST)
}

pub fn architecture(root: &Path) -> RenderedPrompt {
    let app_code = read_source(root, APP_COMPONENT, Some(APP_EXCERPT));

    let context = format!(
        "
CODE ACTUEL App.jsx:
{app_code}...

CONTRAINTES:
- Garder la compatibilité existante
- Migration progressive possible
- Performance maintenue
- Design system préservé
"
    );

    render(&context, None, ARCHITECTURE_REQUEST)
}

pub const LIQUID_ANIMATIONS_CONTEXT: &str = "
STACK TECHNIQUE:
- React 19 + Vite + Tailwind CSS
- Framer Motion pour animations
- Supabase pour données temps réel
- Lucide React pour icônes

OBJECTIFS DESIGN:
- Esthétique Apple nacrée (liquid glass effects)
- Particules liquides interactives
- Morphing organique entre états
- Performance 60fps sur mobile/desktop
";

pub const LIQUID_ANIMATIONS_REQUEST: &str = "
MISSION: Créer le système d'animations liquides le plus avancé au monde

OPTIMISATIONS REQUISES:

1. 🌊 PHYSIQUE LIQUIDE RÉALISTE:
   - Simulation Navier-Stokes simplifiée
   - Tension de surface et viscosité
   - Interactions particules sophistiquées
   - Morphing organique avec courbes de Bézier

2. ⚡ PERFORMANCE EXTRÊME:
   - GPU acceleration (transform3d, will-change)
   - Web Workers pour calculs intensifs
   - Intersection Observer pour optimisation
   - Memory pooling pour particules

3. 🎨 EFFETS VISUELS PREMIUM:
   - Réfractions et caustics
   - Iridescence et nacré
   - Blur et backdrop-filter avancés
   - Transitions liquides entre thèmes

4. 🧠 INTELLIGENCE ADAPTATIVE:
   - Adaptation automatique aux performances
   - Réduction gracieuse sur mobile
   - Respect prefers-reduced-motion
   - Apprentissage des préférences

5. 🏗️ ARCHITECTURE MODERNE:
   - Hooks React optimisés
   - TypeScript pour robustesse
   - Composants atomiques réutilisables
   - API propre et extensible

Génère le code complet optimisé avec explications techniques détaillées.
";

pub const COMMAND_PALETTE_CONTEXT: &str = "
INTÉGRATIONS DISPONIBLES:
- OpenAI API (GPT-5, DALL-E)
- Anthropic API (Claude)
- Supabase (base de données + Edge Functions)
- GitHub CLI (déjà configuré)
- Vercel API (déploiement)

DESIGN SYSTEM:
- Liquid glass effects
- Animations Framer Motion
- Tailwind CSS + variables CSS
- Lucide React icons
";

pub const COMMAND_PALETTE_REQUEST: &str = "
MISSION: Créer la Command Palette IA la plus révolutionnaire au monde

FONCTIONNALITÉS MAGIQUES:

1. 🧠 INTELLIGENCE CONTEXTUELLE:
   - Compréhension langage naturel (OpenAI)
   - Génération de contenu (Anthropic)
   - Apprentissage des habitudes utilisateur
   - Suggestions prédictives intelligentes

2. 🎨 INTERFACE LIQUIDE:
   - Morphing visuel en temps réel
   - Animations de frappe fluides
   - Feedback haptique (si supporté)
   - Transitions organiques

3. ⚡ COMMANDES MAGIQUES:
   - \"Palette bleu océan\" → transition thème fluide
   - \"Mode coucher de soleil\" → morphing complet UI
   - \"Performances système\" → métriques live animées
   - \"Créer section hero\" → génération IA + insertion
   - \"Optimiser animations\" → analyse + suggestions
   - \"Export GitHub\" → commit automatique
   - \"Deploy Vercel\" → déploiement en un clic

4. 🔮 PRÉDICTIONS IA:
   - Analyse du contexte de travail
   - Suggestions de commandes pertinentes
   - Completion automatique intelligente
   - Historique et favoris adaptatifs

5. 🌐 INTÉGRATIONS AVANCÉES:
   - Supabase pour données temps réel
   - GitHub pour versioning
   - Vercel pour déploiement
   - Analytics pour optimisation

Génère le code React complet avec hooks, context et intégrations IA.
";

pub const ARCHITECTURE_REQUEST: &str = "
MISSION: Refactoriser l'architecture pour une scalabilité maximale

OPTIMISATIONS ARCHITECTURE:

1. 🏗️ STRUCTURE MODULAIRE:
   - Composants atomiques (atoms, molecules, organisms)
   - Hooks personnalisés réutilisables
   - Context API optimisé
   - Services séparés (API, storage, analytics)

2. ⚡ PERFORMANCE PREMIUM:
   - Code splitting intelligent
   - Lazy loading stratégique
   - Memoization optimisée
   - Bundle analysis et optimisation

3. 🎨 DESIGN SYSTEM COHÉRENT:
   - Tokens de design centralisés
   - Thème adaptatif sophistiqué
   - Animations coordonnées
   - Responsive design parfait

4. 🔄 GESTION D'ÉTAT MODERNE:
   - État local vs global intelligent
   - Synchronisation Supabase temps réel
   - Optimistic updates
   - Error boundaries robustes

5. 🧪 QUALITÉ & MAINTENABILITÉ:
   - TypeScript strict
   - Tests unitaires et d'intégration
   - Documentation automatique
   - Linting et formatting

Propose une architecture refactorisée complète avec les meilleures pratiques 2025.
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sources::MISSING_FILE_PLACEHOLDER;

    #[test]
    fn test_render_without_code_files_uses_placeholder() {
        let prompt = command_palette();
        assert_eq!(prompt.system.as_deref(), Some(SYSTEM_PROMPT));
        assert!(prompt.user.contains("FICHIERS DE CODE:\nAucun fichier fourni\n"));
        assert!(prompt.user.contains(COMMAND_PALETTE_CONTEXT));
    }

    #[test]
    fn test_liquid_animations_missing_files_become_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = liquid_animations(dir.path());

        let expected = format!(
            "{{\n  \"LiquidParticles.jsx\": \"{p}\",\n  \"LiquidMorphing.jsx\": \"{p}\",\n  \"App.css\": \"{p}\"\n}}",
            p = "Fichier non trouv\\u00e9"
        );
        assert!(prompt.user.contains(&expected));
    }

    #[test]
    fn test_liquid_animations_truncates_stylesheet_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/components")).unwrap();
        std::fs::write(dir.path().join(APP_STYLESHEET), "c".repeat(4000)).unwrap();
        std::fs::write(dir.path().join(LIQUID_PARTICLES), "x".repeat(5000)).unwrap();

        let prompt = liquid_animations(dir.path());
        assert!(prompt.user.contains(&format!("\"{}\"", "c".repeat(3000))));
        assert!(prompt.user.contains(&"x".repeat(5000)));
    }

    #[test]
    fn test_architecture_excerpt_and_constraints() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join(APP_COMPONENT), "a".repeat(2100)).unwrap();

        let prompt = architecture(dir.path());
        assert!(prompt
            .user
            .contains(&format!("CODE ACTUEL App.jsx:\n{}...\n", "a".repeat(2000))));
        assert!(prompt.user.contains("CONTRAINTES:"));
        assert!(prompt.user.contains("FICHIERS DE CODE:\nAucun fichier fourni"));
    }
}
