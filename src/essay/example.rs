use serde::{Deserialize, Serialize};

use crate::essay::annotation::Annotation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Selector label, keyed to school year as in the course material.
    pub fn label(self) -> &'static str {
        match self {
            Level::Basic => "Basic (Year 5)",
            Level::Intermediate => "Intermediate (Year 6)",
            Level::Advanced => "Advanced (Year 7)",
        }
    }

    pub const ALL: [Level; 3] = [Level::Basic, Level::Intermediate, Level::Advanced];
}

/// An annotated example essay. Immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Example {
    pub id: String,
    pub title: String,
    pub level: Level,
    pub text: String,
    pub annotations: Vec<Annotation>,
}

/// Source of example sets keyed by text type. The static implementation
/// stands in for a future service-backed one.
pub trait ExampleProvider {
    fn examples_for(&self, text_type: &str) -> Vec<Example>;
}

pub struct MockExampleProvider;

impl ExampleProvider for MockExampleProvider {
    fn examples_for(&self, text_type: &str) -> Vec<Example> {
        match text_type {
            "narrative" => narrative_examples(),
            "persuasive" => persuasive_examples(),
            _ => default_examples(),
        }
    }
}

fn example(
    id: &str,
    title: &str,
    level: Level,
    text: &str,
    annotations: &[(usize, usize, &str)],
) -> Example {
    Example {
        id: id.to_string(),
        title: title.to_string(),
        level,
        text: text.to_string(),
        annotations: annotations
            .iter()
            .map(|&(start, end, note)| Annotation::new(start, end, note))
            .collect(),
    }
}

fn narrative_examples() -> Vec<Example> {
    vec![
        example(
            "narrative-basic",
            "The Lost Dog",
            Level::Basic,
            "I lost my dog yesterday. I was very sad. I looked everywhere for him. I looked in the park. I looked in my garden. I asked my neighbors. Then I heard a bark. It was coming from the shed. I opened the door. My dog was inside! He was happy to see me. I was happy too.",
            &[
                (0, 22, "Simple opening that establishes the problem"),
                (23, 38, "Tells emotion directly"),
                (39, 107, "Lists actions in a logical sequence"),
                (108, 123, "Creates a moment of discovery"),
                (124, 190, "Simple resolution with emotional closure"),
            ],
        ),
        example(
            "narrative-intermediate",
            "The Unexpected Discovery",
            Level::Intermediate,
            "The old attic had always been forbidden territory. As I climbed the creaking stairs, my heart pounded against my ribs. What secrets was this dusty room hiding? I pushed open the door, and a shaft of golden sunlight revealed a treasure trove of forgotten memories. Old photographs, yellowed with age, spilled from a wooden chest. Each one told a story of people I'd never met but somehow recognized. Hours passed as I pieced together the puzzle of my family's past, until the setting sun reminded me that some secrets are meant to be discovered.",
            &[
                (0, 46, "Creates mystery with a forbidden place"),
                (47, 106, "Shows character's feelings through physical reaction"),
                (107, 143, "Uses a question to build intrigue"),
                (144, 255, "Uses sensory details (visual imagery)"),
                (256, 350, "Specific details about the discovery"),
                (351, 462, "Shows time passing and character's engagement"),
                (463, 544, "Thoughtful conclusion with deeper meaning"),
            ],
        ),
        example(
            "narrative-advanced",
            "The Echo of Memory",
            Level::Advanced,
            "The grandfather clock in the hallway chimed three times, each resonant note hanging in the air like an unanswered question. Maya froze, her fingertips hovering above the brass doorknob that gleamed in the half-light. Behind this door lay the remnants of a life carefully packed away\u{2014}her grandmother's life, preserved like a butterfly under glass since her passing last autumn. The family had unanimously decided that Maya, with her 'artistic sensibilities,' should be the one to sort through the belongings. 'You'll know what to keep,' they'd said, as if memory were a commodity that could be parceled and distributed. With a deep breath that tasted of dust and faded perfume, she turned the knob and stepped into a past that was both foreign and strangely familiar.",
            &[
                (0, 107, "Sophisticated opening with metaphor and sensory detail"),
                (108, 171, "Character introduction with specific action that creates tension"),
                (172, 317, "Background information woven into the narrative"),
                (318, 437, "Dialogue integration with deeper meaning"),
                (438, 544, "Metaphorical language about memory"),
                (545, 662, "Sensory details (smell) and contrasting concepts in conclusion"),
            ],
        ),
    ]
}

fn persuasive_examples() -> Vec<Example> {
    vec![
        example(
            "persuasive-basic",
            "Why We Need More Parks",
            Level::Basic,
            "We need more parks in our city. Parks are good for people. They give us places to play and exercise. Parks have trees and plants that make our air cleaner. They also look nice and make people happy. Animals need parks too. Birds and squirrels live in parks. If we build more parks, everyone will be healthier and happier.",
            &[
                (0, 32, "Clear position statement"),
                (33, 56, "Simple supporting point"),
                (57, 95, "Specific benefit explained"),
                (96, 145, "Environmental benefit"),
                (146, 181, "Emotional/psychological benefit"),
                (182, 216, "Additional stakeholder consideration"),
                (217, 288, "Simple concluding statement that restates position"),
            ],
        ),
        example(
            "persuasive-intermediate",
            "Why School Uniforms Should Be Abolished",
            Level::Intermediate,
            "School uniforms should be abolished in all primary schools. They restrict students' individuality and self-expression at a crucial developmental stage. Furthermore, they create an unnecessary financial burden on families who must purchase specific clothing that children quickly outgrow. While some argue that uniforms promote equality, they actually hide but do not solve economic differences. Instead of forcing uniformity, schools should focus on teaching acceptance and celebrating diversity. By allowing children to choose their own clothing within reasonable guidelines, we would foster independence, creativity, and a more authentic school community.",
            &[
                (0, 58, "Clear position statement with specific scope"),
                (59, 139, "First argument with developmental reasoning"),
                (140, 255, "Second argument with practical financial impact"),
                (256, 343, "Addresses and refutes counterargument"),
                (344, 428, "Alternative solution proposed"),
                (429, 559, "Strong conclusion with multiple benefits"),
            ],
        ),
        example(
            "persuasive-advanced",
            "Digital Literacy: A Fundamental Right",
            Level::Advanced,
            "In an era where information flows ceaselessly through digital channels, digital literacy must be recognized not merely as a skill but as a fundamental right for every citizen. The digital divide\u{2014}the gap between those with access to technology and the knowledge to use it effectively and those without\u{2014}has evolved from an inconvenience to a critical social justice issue. When essential services, educational resources, and civic participation increasingly migrate online, those without digital literacy skills find themselves systematically excluded from full participation in society. This exclusion perpetuates existing inequalities and creates new barriers to social mobility. Critics may argue that prioritizing digital literacy diverts resources from traditional educational needs, but this perspective creates a false dichotomy. Digital literacy is not separate from core education but integral to how students access, evaluate, and apply knowledge across all disciplines. By implementing comprehensive digital literacy programs in schools, particularly in underserved communities, we can empower the next generation with the tools they need to navigate an increasingly complex information landscape, participate meaningfully in democracy, and access economic opportunities that would otherwise remain beyond reach.",
            &[
                (0, 151, "Sophisticated thesis framing digital literacy as a right, not just a skill"),
                (152, 321, "Defines the problem with specific terminology and evolution"),
                (322, 487, "Explains consequences with cause-effect reasoning"),
                (488, 574, "Connects to broader social issues"),
                (575, 713, "Anticipates and addresses counterargument"),
                (714, 845, "Reframes the issue to resolve the apparent contradiction"),
                (846, 1124, "Solution with specific implementation suggestion"),
                (1125, 1301, "Conclusion with multiple far-reaching benefits"),
            ],
        ),
    ]
}

fn default_examples() -> Vec<Example> {
    vec![
        example(
            "default-basic",
            "Sample Basic Essay",
            Level::Basic,
            "This is a sample essay showing basic writing skills. It has a clear beginning that tells what the essay is about. The middle part gives some information about the topic. The ending reminds the reader of the main idea. This structure helps the reader understand the message.",
            &[
                (0, 54, "Simple introduction"),
                (55, 113, "States the purpose directly"),
                (114, 170, "Mentions the body content"),
                (171, 225, "Describes conclusion function"),
                (226, 283, "Explains the benefit of structure"),
            ],
        ),
        example(
            "default-intermediate",
            "Sample Intermediate Essay",
            Level::Intermediate,
            "Effective writing requires careful planning and thoughtful execution. When writers take time to organize their ideas before beginning, they create more coherent and persuasive texts. This planning phase allows them to identify their main points, arrange them in a logical sequence, and consider how best to support each with evidence or examples. Additionally, thoughtful writers consider their audience's needs and expectations, adjusting their tone and vocabulary accordingly. By following these fundamental principles, anyone can improve their writing skills and communicate more effectively.",
            &[
                (0, 63, "Clear topic sentence with two key concepts"),
                (64, 169, "Elaborates on the first concept (planning)"),
                (170, 312, "Explains specific benefits with details"),
                (313, 421, "Introduces additional consideration (audience awareness)"),
                (422, 533, "Strong conclusion that restates the main idea and adds value"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrative_intermediate_shape() {
        let examples = MockExampleProvider.examples_for("narrative");
        let ex = examples
            .iter()
            .find(|e| e.level == Level::Intermediate)
            .unwrap();
        assert_eq!(ex.id, "narrative-intermediate");
        assert_eq!(ex.annotations.len(), 7);
        assert_eq!(ex.annotations[0].start, 0);
        assert_eq!(ex.annotations[0].end, 46);
    }

    #[test]
    fn test_unknown_type_falls_back_to_default_set() {
        let examples = MockExampleProvider.examples_for("recount");
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].id, "default-basic");
        // The default set has no advanced example
        assert!(!examples.iter().any(|e| e.level == Level::Advanced));
    }

    #[test]
    fn test_annotation_offsets_within_text() {
        for text_type in ["narrative", "persuasive", "other"] {
            for ex in MockExampleProvider.examples_for(text_type) {
                let len = ex.text.chars().count();
                for a in &ex.annotations {
                    assert!(a.start < a.end, "{}: empty annotation", ex.id);
                    assert!(
                        a.start < len,
                        "{}: annotation starts past text end",
                        ex.id
                    );
                }
            }
        }
    }
}
