use std::path::Path;

use super::RenderedPrompt;
use crate::core::sources::{read_source, APP_COMPONENT, LIQUID_MORPHING, LIQUID_PARTICLES};

/// Characters of each component kept in the liquid animations context
const COMPONENT_EXCERPT: usize = 2000;

pub fn render(context: &str, request: &str) -> RenderedPrompt {
    let user = format!(
        "Tu es un expert en développement web moderne, spécialisé dans React, animations CSS avancées, et design systems premium.

CONTEXTE DU PROJET:
WiseWords-AI Hub - Site vitrine révolutionnaire démontrant l'Intelligence Orchestrée
- Stack: React 19 + Vite + Tailwind + Framer Motion + Supabase
- Design: Esthétique Apple nacrée avec liquid glass effects
- Objectif: Créer la première démonstration mondiale d'IA adaptative

CONTEXTE TECHNIQUE:
{context}

DEMANDE:
{request}

Réponds avec du code optimisé, des explications techniques précises, et des recommandations d'architecture. Focus sur la performance, l'accessibilité et l'innovation visuelle."
    );

    RenderedPrompt { system: None, user }
}

pub fn liquid_animations(root: &Path) -> RenderedPrompt {
    let particles = read_source(root, LIQUID_PARTICLES, Some(COMPONENT_EXCERPT));
    let morphing = read_source(root, LIQUID_MORPHING, Some(COMPONENT_EXCERPT));

    let context = format!(
        "
CODE ACTUEL - LiquidParticles.jsx:
{particles}...

CODE ACTUEL - LiquidMorphing.jsx:
{morphing}...
"
    );

    render(&context, LIQUID_ANIMATIONS_REQUEST)
}

pub fn architecture(root: &Path) -> RenderedPrompt {
    let app_code = read_source(root, APP_COMPONENT, None);

    let context = format!(
        "
CODE ACTUEL - App.jsx:
{app_code}
"
    );

    render(&context, ARCHITECTURE_REQUEST)
}

pub fn command_palette() -> RenderedPrompt {
    render("", COMMAND_PALETTE_REQUEST)
}

pub const LIQUID_ANIMATIONS_REQUEST: &str = "
Analyse et optimise ces composants d'animations liquides pour:

1. PERFORMANCE MAXIMALE:
   - Optimisations GPU avec transform3d et will-change
   - Réduction des repaints/reflows
   - Gestion mémoire efficace des particules
   - Throttling intelligent des calculs

2. EFFETS VISUELS AVANCÉS:
   - Simulation fluide plus réaliste (viscosité, tension de surface)
   - Interactions particules-souris sophistiquées
   - Morphing liquide avec courbes de Bézier organiques
   - Effets de réfraction et caustics

3. ARCHITECTURE MODERNE:
   - Hooks React optimisés avec useMemo/useCallback
   - Web Workers pour calculs intensifs
   - Intersection Observer pour performance
   - TypeScript pour robustesse

4. ACCESSIBILITÉ & RESPONSIVE:
   - Respect prefers-reduced-motion
   - Adaptation mobile intelligente
   - Fallbacks gracieux

Fournis le code optimisé complet avec explications des améliorations.
";

pub const ARCHITECTURE_REQUEST: &str = "
Optimise l'architecture React de cette application pour:

1. PERFORMANCE PREMIUM:
   - Code splitting intelligent
   - Lazy loading des composants lourds
   - Memoization stratégique
   - Optimisation des re-renders

2. DESIGN SYSTEM COHÉRENT:
   - Tokens de design centralisés
   - Composants atomiques réutilisables
   - Thème adaptatif sophistiqué
   - Animations coordonnées

3. GESTION D'ÉTAT MODERNE:
   - Context API optimisé ou Zustand
   - État local vs global intelligent
   - Synchronisation Supabase temps réel

4. EXPÉRIENCE UTILISATEUR:
   - Transitions fluides entre sections
   - Loading states élégants
   - Error boundaries robustes
   - Progressive enhancement

Propose une architecture refactorisée avec les meilleures pratiques 2025.
";

pub const COMMAND_PALETTE_REQUEST: &str = "
Conçois une Command Palette IA révolutionnaire pour WiseWords-AI Hub qui:

1. INTELLIGENCE CONTEXTUELLE:
   - Compréhension du langage naturel
   - Suggestions prédictives basées sur l'usage
   - Apprentissage des préférences utilisateur
   - Commandes dynamiques selon le contexte

2. INTERFACE MAGIQUE:
   - Animations liquides lors de la frappe
   - Morphing visuel des résultats
   - Feedback haptique (si supporté)
   - Raccourcis clavier avancés

3. FONCTIONNALITÉS AVANCÉES:
   - \"Palette bleu océan\" → transition thème fluide
   - \"Mode coucher de soleil\" → morphing complet
   - \"Performances système\" → métriques live animées
   - \"Créer section\" → génération de contenu IA
   - \"Optimiser design\" → suggestions automatiques

4. INTÉGRATION IA:
   - OpenAI pour compréhension des commandes
   - Anthropic pour génération de contenu
   - Supabase pour historique et apprentissage
   - Streaming des réponses en temps réel

Fournis le code React complet avec hooks personnalisés et intégration IA.
";
