//! Built-in Guide Table
//!
//! The nine field procedures compiled into the crate. Table order is
//! presentation order; ids are stable and referenced by favorites.

use super::{Guide, GuideCategory, GuidePriority};

/// All built-in guides
pub const GUIDES: &[Guide] = &[
    // First aid
    Guide {
        id: "fa-001",
        title: "Severe Bleeding Control",
        category: GuideCategory::FirstAid,
        priority: GuidePriority::Critical,
        time_to_read: "2 min",
        summary: "Immediate steps to control life-threatening bleeding and prevent shock.",
        steps: &[
            "Apply direct pressure with clean cloth or bandage",
            "Elevate the injured area above heart level if possible",
            "Maintain pressure for 10-15 minutes without checking",
            "If blood soaks through, add more layers (do not remove original)",
            "Apply pressure to arterial pressure points if bleeding continues",
            "Consider tourniquet only if trained and bleeding is life-threatening",
        ],
        warnings: &[
            "Do not remove embedded objects",
            "Do not use tourniquet unless properly trained",
            "Seek immediate medical attention for severe bleeding",
        ],
        materials: &[
            "Clean cloth or bandages",
            "Gloves if available",
            "Pressure bandage",
        ],
        tags: &["bleeding", "trauma", "emergency", "life-threatening"],
    },
    Guide {
        id: "fa-002",
        title: "Burn Treatment Protocol",
        category: GuideCategory::FirstAid,
        priority: GuidePriority::High,
        time_to_read: "3 min",
        summary: "Comprehensive burn treatment for different degrees of burns.",
        steps: &[
            "Remove person from heat source immediately",
            "Cool burn with cool (not cold) running water for 10-20 minutes",
            "Remove jewelry and loose clothing before swelling occurs",
            "Assess burn severity (1st, 2nd, or 3rd degree)",
            "Cover with sterile, non-adhesive bandage",
            "Give over-the-counter pain medication if conscious",
            "Keep burned area elevated if possible",
        ],
        warnings: &[
            "Never use ice, butter, or oils on burns",
            "Do not break blisters",
            "Seek medical attention for burns larger than 3 inches",
        ],
        materials: &[
            "Cool water",
            "Sterile bandages",
            "Pain medication",
            "Clean cloth",
        ],
        tags: &["burns", "fire", "heat", "injury"],
    },
    Guide {
        id: "fa-003",
        title: "Choking Emergency Response",
        category: GuideCategory::FirstAid,
        priority: GuidePriority::Critical,
        time_to_read: "2 min",
        summary: "Life-saving techniques for conscious and unconscious choking victims.",
        steps: &[
            "Assess if person can cough or speak",
            "If conscious: Encourage coughing first",
            "If unable to cough: Perform 5 back blows between shoulder blades",
            "If unsuccessful: Perform 5 abdominal thrusts (Heimlich maneuver)",
            "Alternate between back blows and abdominal thrusts",
            "If person becomes unconscious: Begin CPR",
            "Continue until object is expelled or help arrives",
        ],
        warnings: &[
            "Do not perform abdominal thrusts on pregnant women or infants",
            "Check mouth for visible objects before rescue breaths",
            "Call for emergency help immediately",
        ],
        materials: &["No materials required - use hands only"],
        tags: &["choking", "airway", "heimlich", "cpr"],
    },
    Guide {
        id: "fa-004",
        title: "Fracture Stabilization",
        category: GuideCategory::FirstAid,
        priority: GuidePriority::High,
        time_to_read: "4 min",
        summary: "Proper immobilization techniques for suspected fractures.",
        steps: &[
            "Do not move the person unless in immediate danger",
            "Assess for open fractures (bone visible through skin)",
            "Immobilize the joint above and below the fracture",
            "Use rigid materials for splinting (boards, magazines)",
            "Pad splint with soft materials",
            "Secure splint with bandages or cloth strips",
            "Check circulation below the fracture every 15 minutes",
        ],
        warnings: &[
            "Never try to realign bones",
            "Do not give food or water in case surgery is needed",
            "Watch for signs of shock",
        ],
        materials: &[
            "Rigid splinting material",
            "Padding",
            "Bandages or cloth strips",
        ],
        tags: &["fracture", "bone", "splint", "immobilization"],
    },
    // Shelter
    Guide {
        id: "sh-001",
        title: "Emergency Lean-To Shelter",
        category: GuideCategory::Shelter,
        priority: GuidePriority::High,
        time_to_read: "5 min",
        summary: "Quick and effective shelter construction using natural materials.",
        steps: &[
            "Find or create a ridgepole 6-8 feet long",
            "Secure one end to a tree or prop between two trees",
            "Lean support branches against ridgepole at 45-degree angle",
            "Space branches 6-12 inches apart",
            "Layer smaller branches and twigs over framework",
            "Cover with leaves, pine needles, or bark for insulation",
            "Create thick ground insulation inside shelter",
        ],
        warnings: &[
            "Avoid low-lying areas prone to flooding",
            "Ensure adequate ventilation",
            "Check for hazards like dead trees or animal dens",
        ],
        materials: &[
            "Ridgepole (6-8 ft)",
            "Support branches",
            "Covering materials (leaves, bark)",
            "Ground insulation",
        ],
        tags: &["shelter", "lean-to", "survival", "construction"],
    },
    Guide {
        id: "sh-002",
        title: "Debris Hut Construction",
        category: GuideCategory::Shelter,
        priority: GuidePriority::Medium,
        time_to_read: "6 min",
        summary: "Insulated shelter design for cold weather survival.",
        steps: &[
            "Find ridgepole slightly longer than your height",
            "Prop one end on stump or rock, other end on ground",
            "Create door frame with Y-shaped stick",
            "Lay ribbing branches along both sides of ridgepole",
            "Pile debris (leaves, pine needles) 2-3 feet thick over frame",
            "Create entrance plug from debris",
            "Line interior with dry, soft materials",
        ],
        warnings: &[
            "Make interior just large enough for your body",
            "Ensure debris is dry to maintain insulation",
            "Test structural integrity before use",
        ],
        materials: &[
            "Ridgepole",
            "Y-shaped door frame",
            "Ribbing branches",
            "Large amount of debris",
        ],
        tags: &["debris hut", "insulation", "cold weather", "survival"],
    },
    Guide {
        id: "sh-003",
        title: "Tarp Shelter Configurations",
        category: GuideCategory::Shelter,
        priority: GuidePriority::Medium,
        time_to_read: "4 min",
        summary: "Multiple tarp setup options for different weather conditions.",
        steps: &[
            "A-Frame: Tie ridgeline between two trees, drape tarp over",
            "Lean-To: Secure one edge high, stake opposite edge low",
            "Diamond Fly: Stake one corner high, three corners low",
            "Plow Point: Stake one corner low into wind, others high",
            "Secure all tie-out points with proper knots",
            "Adjust tension to prevent flapping",
            "Create drainage around shelter perimeter",
        ],
        warnings: &[
            "Choose location away from dead trees",
            "Ensure proper water runoff",
            "Account for wind direction changes",
        ],
        materials: &[
            "Tarp or plastic sheeting",
            "Rope or paracord",
            "Stakes or rocks",
            "Carabiners (optional)",
        ],
        tags: &["tarp", "quick shelter", "weather protection", "versatile"],
    },
    // Emergency protocols
    Guide {
        id: "ep-001",
        title: "Earthquake Response Protocol",
        category: GuideCategory::Protocols,
        priority: GuidePriority::Critical,
        time_to_read: "3 min",
        summary: "Immediate actions during and after earthquake events.",
        steps: &[
            "DROP to hands and knees immediately",
            "COVER head and neck under sturdy table or against interior wall",
            "HOLD ON to shelter and protect head/neck with arms",
            "Stay in position until shaking stops completely",
            "If outdoors: Move away from buildings, trees, power lines",
            "If in vehicle: Pull over, avoid overpasses and bridges",
            "After shaking: Check for injuries and hazards",
            "Evacuate if building is damaged",
        ],
        warnings: &[
            "Do not run outside during shaking",
            "Avoid doorways - they are not safer than other locations",
            "Expect aftershocks",
        ],
        materials: &["No materials required - use available cover"],
        tags: &["earthquake", "drop cover hold", "natural disaster", "safety"],
    },
    Guide {
        id: "ep-002",
        title: "Fire Evacuation Procedure",
        category: GuideCategory::Protocols,
        priority: GuidePriority::Critical,
        time_to_read: "2 min",
        summary: "Safe evacuation steps during fire emergencies.",
        steps: &[
            "Alert others immediately - shout \"FIRE!\"",
            "Feel doors with back of hand before opening",
            "If door is hot: Do not open, find alternate route",
            "Stay low to avoid smoke (crawl if necessary)",
            "Use stairs, never elevators",
            "Go to predetermined meeting point",
            "Call emergency services once safely outside",
            "Do not re-enter building for any reason",
        ],
        warnings: &[
            "Smoke is more dangerous than flames",
            "Never use elevators during fire",
            "Do not stop to collect belongings",
        ],
        materials: &["Flashlight (if available)", "Wet cloth for smoke protection"],
        tags: &["fire", "evacuation", "smoke", "emergency exit"],
    },
];
