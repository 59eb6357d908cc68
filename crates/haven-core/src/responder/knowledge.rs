//! Emergency Knowledge Base
//!
//! Keyword-indexed response protocols. Matching is a substring scan in
//! table order, so earlier entries win when a prompt mentions several
//! topics. All response text is fixed at compile time; the same prompt
//! always produces the same reply.

// ============================================================================
// TOPIC TABLE
// ============================================================================

/// One keyword-addressed protocol
#[derive(Debug)]
pub struct TopicEntry {
    /// Lowercase keyword the prompt is scanned for
    pub keyword: &'static str,
    /// Heading used in the formatted protocol
    pub title: &'static str,
    /// Ordered immediate actions
    pub instructions: &'static [&'static str],
}

/// Built-in protocols, scanned in order
pub const TOPICS: &[TopicEntry] = &[
    TopicEntry {
        keyword: "bleeding",
        title: "Bleeding Control",
        instructions: &[
            "Apply direct pressure with clean cloth",
            "Elevate injured area above heart level",
            "Use pressure points if bleeding continues",
            "Do not remove embedded objects",
            "Monitor for signs of shock",
        ],
    },
    TopicEntry {
        keyword: "burns",
        title: "Burn Treatment",
        instructions: &[
            "Remove from heat source immediately",
            "Cool with running water for 10-20 minutes",
            "Remove jewelry before swelling",
            "Cover with sterile bandage",
            "Never use ice, butter, or oils",
        ],
    },
    TopicEntry {
        keyword: "shelter",
        title: "Emergency Shelter",
        instructions: &[
            "Choose location away from hazards",
            "Insulate from ground using debris",
            "Create windbreak and roof",
            "Ensure proper ventilation",
            "Make entrance face away from wind",
        ],
    },
    TopicEntry {
        keyword: "water",
        title: "Water Safety",
        instructions: &[
            "Boil water for 1 minute minimum",
            "Use water purification tablets",
            "Filter through cloth first",
            "Solar disinfection in clear bottles",
            "Avoid stagnant or contaminated sources",
        ],
    },
    TopicEntry {
        keyword: "earthquake",
        title: "Earthquake Response",
        instructions: &[
            "Drop, Cover, and Hold On",
            "Stay away from windows and heavy objects",
            "If outdoors, move away from buildings",
            "Do not run outside during shaking",
            "Check for injuries after shaking stops",
        ],
    },
];

/// Find the first topic whose keyword appears in the prompt
///
/// Expects `lowered` to already be lowercased.
pub fn match_topic(lowered: &str) -> Option<&'static TopicEntry> {
    TOPICS.iter().find(|entry| lowered.contains(entry.keyword))
}

// ============================================================================
// RESPONSE FORMATTING
// ============================================================================

/// Shared closing block for every protocol response
const SAFETY_NOTES: &str = "**Important Notes:**\n\
    - Follow these steps in order for best results\n\
    - Seek professional medical help when available\n\
    - Stay calm and assess the situation continuously\n\
    - Prioritize safety of yourself and others\n\
    \n\
    **Remember:** These are emergency guidelines. Professional medical \
    attention should be sought as soon as possible for serious injuries \
    or conditions.";

/// Render a matched topic as a numbered protocol
pub fn format_protocol(entry: &TopicEntry) -> String {
    let steps = entry
        .instructions
        .iter()
        .enumerate()
        .map(|(index, instruction)| format!("{}. {}", index + 1, instruction))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "**{} Protocol:**\n\n**Immediate Actions:**\n{}\n\n{}",
        entry.title, steps, SAFETY_NOTES
    )
}

/// Render the general guidance reply used when no topic matches
///
/// The prompt is embedded verbatim. Trailing spaces inside the template
/// are deliberate; replies must be stable across versions.
pub fn format_fallback(prompt: &str) -> String {
    format!(
        "I understand you're asking about \"{}\". \n\
        \n\
        **General Emergency Guidance:**\n\
        \n\
        1. **Assess the Situation:** Ensure your safety first before helping others\n\
        2. **Call for Help:** If possible, contact emergency services immediately\n\
        3. **Provide Basic Care:** Use your training and available resources\n\
        4. **Monitor Continuously:** Watch for changes in condition\n\
        5. **Document:** Keep track of what happened and treatments given\n\
        \n\
        **Available Information:**\n\
        I have detailed knowledge about:\n\
        - First Aid & Medical Emergencies\n\
        - Emergency Shelter Construction  \n\
        - Water Purification & Safety\n\
        - Natural Disaster Response\n\
        - Basic Survival Techniques\n\
        \n\
        Please ask a more specific question about any of these topics for detailed, step-by-step guidance.\n\
        \n\
        **Emergency Priority:** Life-threatening conditions require immediate professional medical attention when available.",
        prompt
    )
}

// ============================================================================
// TESTS
// ============================================================================
