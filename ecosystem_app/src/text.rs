// text.rs - Static copy shown around the grid

pub const TITLE: &str = "Business Ecosystem Simulator";

pub const WELCOME: &str = "Welcome to the Business Ecosystem Simulator! Each cell represents a potential \
business opportunity. Watch as businesses emerge, thrive, or fail based on their surroundings. \
Click cells to add or remove businesses, then start the simulation to see how the ecosystem evolves over time.";

pub const HOW_TO_PLAY: &[&str] = &[
    "Click on cells to add or remove businesses",
    "Press 'Start Simulation' to watch the ecosystem evolve",
    "Use 'Clear Grid' to start over",
    "'Randomize' for a quick start with random businesses",
    "Pick a pattern and press 'Apply' for a known starting layout",
];

pub const RULES: &str = "\
Simulation Rules:
1. Each cell represents a potential business opportunity.
2. Filled cells are active businesses.
3. Empty cells are untapped opportunities.
4. For each generation:
   - A business with fewer than 2 neighboring businesses fails (underpopulation).
   - A business with 2 or 3 neighboring businesses thrives.
   - A business with more than 3 neighboring businesses fails (overcrowding).
   - An empty cell with exactly 3 neighboring businesses spawns a new business.

Significance of the Simulation:
- Market Saturation: too many businesses in one area can lead to failure.
- Synergy: businesses thrive with the right amount of competition and cooperation.
- Innovation: new businesses emerge where existing activity is balanced.
- Economic Cycles: patterns of growth, decline and regeneration appear.
- Clustering: successful business areas can form and persist over time.

While simplified, this model helps visualize economic principles and can be used to explore \
ideas about business development, urban planning and economic policy.";
