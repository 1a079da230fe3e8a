//! Built-in standards data
//!
//! Common Core ELA and Math, NGSS science, NCSS social studies, plus a
//! sample of state-specific variants.

use super::StateExtension;
use crate::models::Standard;

/// Common Core English Language Arts
pub fn common_core_ela() -> Vec<Standard> {
    vec![
        // Reading Literature
        Standard::new(
            "CCSS.ELA-LITERACY.RL.K.1",
            "ela",
            "K",
            "With prompting and support, ask and answer questions about key details in a text.",
            &["ask questions", "answer questions", "key details", "text comprehension", "reading comprehension"],
            "Reading Literature",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.RL.1.1",
            "ela",
            "1",
            "Ask and answer questions about key details in a text.",
            &["ask questions", "answer questions", "key details", "text comprehension", "reading comprehension"],
            "Reading Literature",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.RL.2.1",
            "ela",
            "2",
            "Ask and answer such questions as who, what, where, when, why, and how to demonstrate understanding of key details in a text.",
            &["who what where when why how", "questions", "key details", "text comprehension", "reading comprehension"],
            "Reading Literature",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.RL.3.1",
            "ela",
            "3",
            "Ask and answer questions to demonstrate understanding of a text, referring explicitly to the text as the basis for the answers.",
            &["ask questions", "answer questions", "text evidence", "reading comprehension", "text analysis"],
            "Reading Literature",
        ),
        // Reading Foundational Skills
        Standard::new(
            "CCSS.ELA-LITERACY.RF.K.1",
            "ela",
            "K",
            "Demonstrate understanding of the organization and basic features of print.",
            &["print concepts", "letters", "words", "sentences", "book orientation"],
            "Reading Foundational Skills",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.RF.1.3",
            "ela",
            "1",
            "Know and apply grade-level phonics and word analysis skills in decoding words.",
            &["phonics", "decoding", "word analysis", "letter sounds", "reading fluency"],
            "Reading Foundational Skills",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.RF.2.4",
            "ela",
            "2",
            "Read with sufficient accuracy and fluency to support comprehension.",
            &["reading fluency", "accuracy", "comprehension", "oral reading", "reading rate"],
            "Reading Foundational Skills",
        ),
        // Writing
        Standard::new(
            "CCSS.ELA-LITERACY.W.K.1",
            "ela",
            "K",
            "Use a combination of drawing, dictating, and writing to compose opinion pieces.",
            &["opinion writing", "drawing", "dictating", "writing composition"],
            "Writing",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.W.1.1",
            "ela",
            "1",
            "Write opinion pieces in which they introduce the topic or name the book they are writing about and state an opinion or preference about the topic or book.",
            &["opinion writing", "topic introduction", "writing composition", "book response"],
            "Writing",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.W.2.1",
            "ela",
            "2",
            "Write opinion pieces in which they introduce the topic or book they are writing about, state an opinion, supply reasons that support the opinion, and provide a concluding statement or section.",
            &["opinion writing", "supporting reasons", "conclusion", "writing structure"],
            "Writing",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.W.3.1",
            "ela",
            "3",
            "Write opinion pieces on topics or texts, supporting a point of view with reasons.",
            &["opinion writing", "point of view", "supporting reasons", "argumentative writing"],
            "Writing",
        ),
        // Speaking and Listening
        Standard::new(
            "CCSS.ELA-LITERACY.SL.K.1",
            "ela",
            "K",
            "Participate in collaborative conversations with diverse partners about kindergarten topics and texts with peers and adults in small and large groups.",
            &["collaborative conversations", "discussion", "oral communication", "social interaction"],
            "Speaking and Listening",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.SL.1.4",
            "ela",
            "1",
            "Describe people, places, things, and events with relevant details, expressing ideas and feelings clearly.",
            &["describing", "relevant details", "oral expression", "clear communication"],
            "Speaking and Listening",
        ),
        Standard::new(
            "CCSS.ELA-LITERACY.SL.2.6",
            "ela",
            "2",
            "Produce complete sentences when appropriate to task and situation in order to provide requested detail or clarification.",
            &["complete sentences", "oral communication", "appropriate language", "clarification"],
            "Speaking and Listening",
        ),
    ]
}

/// Common Core Mathematics
pub fn common_core_math() -> Vec<Standard> {
    vec![
        // Counting and Cardinality
        Standard::new(
            "CCSS.MATH.CONTENT.K.CC.A.1",
            "math",
            "K",
            "Count to 100 by ones and by tens.",
            &["counting", "numbers", "sequence", "skip counting", "number recognition"],
            "Counting and Cardinality",
        ),
        Standard::new(
            "CCSS.MATH.CONTENT.K.CC.B.4",
            "math",
            "K",
            "Understand the relationship between numbers and quantities; connect counting to cardinality.",
            &["number quantity", "cardinality", "one-to-one correspondence", "counting"],
            "Counting and Cardinality",
        ),
        // Operations and Algebraic Thinking
        Standard::new(
            "CCSS.MATH.CONTENT.1.OA.A.1",
            "math",
            "1",
            "Use addition and subtraction within 20 to solve word problems involving situations of adding to, taking from, putting together, taking apart, and comparing.",
            &["addition", "subtraction", "word problems", "problem solving", "within 20"],
            "Operations and Algebraic Thinking",
        ),
        Standard::new(
            "CCSS.MATH.CONTENT.2.OA.A.1",
            "math",
            "2",
            "Use addition and subtraction within 100 to solve one- and two-step word problems involving situations of adding to, taking from, putting together, taking apart, and comparing.",
            &["addition", "subtraction", "word problems", "two-step problems", "within 100"],
            "Operations and Algebraic Thinking",
        ),
        Standard::new(
            "CCSS.MATH.CONTENT.3.OA.A.1",
            "math",
            "3",
            "Interpret products of whole numbers, e.g., interpret 5 × 7 as the total number of objects in 5 groups of 7 objects each.",
            &["multiplication", "products", "groups", "arrays", "repeated addition"],
            "Operations and Algebraic Thinking",
        ),
        // Number and Operations in Base Ten
        Standard::new(
            "CCSS.MATH.CONTENT.1.NBT.A.1",
            "math",
            "1",
            "Count to 120, starting at any number less than 120. In this range, read and write numerals and represent a number of objects with a written numeral.",
            &["counting to 120", "number writing", "numeral recognition", "number representation"],
            "Number and Operations in Base Ten",
        ),
        Standard::new(
            "CCSS.MATH.CONTENT.2.NBT.A.1",
            "math",
            "2",
            "Understand that the three digits of a three-digit number represent amounts of hundreds, tens, and ones.",
            &["place value", "hundreds", "tens", "ones", "three-digit numbers"],
            "Number and Operations in Base Ten",
        ),
        Standard::new(
            "CCSS.MATH.CONTENT.3.NBT.A.2",
            "math",
            "3",
            "Fluently add and subtract within 1000 using strategies and algorithms based on place value, properties of operations, and/or the relationship between addition and subtraction.",
            &["addition", "subtraction", "within 1000", "fluency", "place value", "algorithms"],
            "Number and Operations in Base Ten",
        ),
        // Measurement and Data
        Standard::new(
            "CCSS.MATH.CONTENT.K.MD.A.1",
            "math",
            "K",
            "Describe measurable attributes of objects, such as length or weight. Describe several measurable attributes of a single object.",
            &["measurement", "attributes", "length", "weight", "describing objects"],
            "Measurement and Data",
        ),
        Standard::new(
            "CCSS.MATH.CONTENT.1.MD.A.2",
            "math",
            "1",
            "Express the length of an object as a whole number of length units, by laying multiple copies of a shorter object (the length unit) end to end.",
            &["length measurement", "units", "measuring tools", "non-standard units"],
            "Measurement and Data",
        ),
        Standard::new(
            "CCSS.MATH.CONTENT.2.MD.A.1",
            "math",
            "2",
            "Measure the length of an object by selecting and using appropriate tools such as rulers, yardsticks, meter sticks, and measuring tapes.",
            &["length measurement", "rulers", "measuring tools", "appropriate tools"],
            "Measurement and Data",
        ),
        Standard::new(
            "CCSS.MATH.CONTENT.3.MD.A.1",
            "math",
            "3",
            "Tell and write time to the nearest minute and measure time intervals in minutes. Solve word problems involving addition and subtraction of time intervals in minutes.",
            &["telling time", "time intervals", "minutes", "time word problems"],
            "Measurement and Data",
        ),
    ]
}

/// Next Generation Science Standards
pub fn ngss_standards() -> Vec<Standard> {
    vec![
        Standard::new(
            "K-2-ETS1-1",
            "science",
            "K-2",
            "Ask questions, make observations, and gather information about a situation people want to change to define a simple problem that can be solved through the development of a new or improved object or tool.",
            &["engineering design", "problem solving", "observations", "questions", "tools"],
            "Engineering Design",
        ),
        Standard::new(
            "K-LS1-1",
            "science",
            "K",
            "Use observations to describe patterns of what plants and animals (including humans) need to survive.",
            &["living things", "survival needs", "patterns", "observations", "plants", "animals"],
            "Life Science",
        ),
        Standard::new(
            "1-LS1-1",
            "science",
            "1",
            "Use materials to design a solution to a human problem by mimicking how plants and/or animals use their external parts to help them survive, grow, and meet their needs.",
            &["biomimicry", "external parts", "survival", "design solutions", "animal structures"],
            "Life Science",
        ),
        Standard::new(
            "2-LS4-1",
            "science",
            "2",
            "Make observations of plants and animals to compare the diversity of life in different habitats.",
            &["biodiversity", "habitats", "observations", "comparing", "diversity"],
            "Life Science",
        ),
        Standard::new(
            "3-LS4-3",
            "science",
            "3",
            "Construct an argument that some animals and plants have internal and external structures that function to support survival, growth, reproduction, and behavior.",
            &["structures", "functions", "survival", "growth", "reproduction", "behavior", "argument"],
            "Life Science",
        ),
        Standard::new(
            "K-PS2-1",
            "science",
            "K",
            "Plan and conduct an investigation to compare the effects of different strengths or different directions of pushes and pulls on the motion of an object.",
            &["forces", "motion", "pushes", "pulls", "investigation", "comparing"],
            "Physical Science",
        ),
        Standard::new(
            "1-PS4-1",
            "science",
            "1",
            "Plan and conduct investigations to provide evidence that vibrating materials can make sound and that sound can make materials vibrate.",
            &["sound", "vibrations", "investigations", "evidence", "materials"],
            "Physical Science",
        ),
        Standard::new(
            "2-PS1-1",
            "science",
            "2",
            "Plan and conduct an investigation to describe and classify different kinds of materials by their observable properties.",
            &["materials", "properties", "classification", "investigation", "observable"],
            "Physical Science",
        ),
        Standard::new(
            "3-PS2-1",
            "science",
            "3",
            "Plan and conduct an investigation to provide evidence of the effects of balanced and unbalanced forces on the motion of an object.",
            &["balanced forces", "unbalanced forces", "motion", "investigation", "evidence"],
            "Physical Science",
        ),
    ]
}

/// National Council for Social Studies (C3 framework)
pub fn social_studies_standards() -> Vec<Standard> {
    vec![
        Standard::new(
            "NCSS.D2.Civ.1.K-2",
            "social",
            "K-2",
            "Describe roles and responsibilities of people in authority.",
            &["authority", "roles", "responsibilities", "community helpers", "government"],
            "Civics",
        ),
        Standard::new(
            "NCSS.D2.Civ.1.3-5",
            "social",
            "3-5",
            "Distinguish the responsibilities and powers of government officials at various levels and branches of government and in different times and places.",
            &["government officials", "responsibilities", "powers", "branches of government", "levels of government"],
            "Civics",
        ),
        Standard::new(
            "NCSS.D2.His.1.K-2",
            "social",
            "K-2",
            "Create and use a sequence of events to describe changes that have occurred over time.",
            &["sequence", "chronology", "changes over time", "events", "timeline"],
            "History",
        ),
        Standard::new(
            "NCSS.D2.His.1.3-5",
            "social",
            "3-5",
            "Create and use a chronological sequence of related events to compare developments that happened at the same time.",
            &["chronological sequence", "related events", "compare developments", "same time period"],
            "History",
        ),
        Standard::new(
            "NCSS.D2.Geo.1.K-2",
            "social",
            "K-2",
            "Use maps, globes, and other simple geographic models to identify cultural and environmental characteristics of places.",
            &["maps", "globes", "geographic models", "cultural characteristics", "environmental characteristics"],
            "Geography",
        ),
        Standard::new(
            "NCSS.D2.Eco.1.K-2",
            "social",
            "K-2",
            "Describe the roles of buyers and sellers in product markets.",
            &["buyers", "sellers", "markets", "products", "economic roles"],
            "Economics",
        ),
    ]
}

/// All national standards, in catalog order
pub fn national_standards() -> Vec<Standard> {
    let mut standards = common_core_ela();
    standards.extend(common_core_math());
    standards.extend(ngss_standards());
    standards.extend(social_studies_standards());
    standards
}

/// Sample state-specific variants
pub fn state_extensions() -> Vec<StateExtension> {
    vec![
        StateExtension::new(
            "California",
            vec![
                Standard::new(
                    "CA.ELD.PI.K.1",
                    "ela",
                    "K",
                    "Contribute to conversations and express ideas by asking and answering yes-no and wh- questions and responding using gestures, words, and simple phrases.",
                    &["English language development", "conversation", "questions", "responses"],
                    "English Language Development",
                ),
                Standard::new(
                    "CA.NGSS.K-ESS2-2",
                    "science",
                    "K",
                    "Construct an argument supported by evidence for how plants and animals (including humans) can change the environment to meet their needs.",
                    &["environment", "change", "plants", "animals", "evidence", "argument"],
                    "Earth Science",
                ),
            ],
        ),
        StateExtension::new(
            "Texas",
            vec![
                Standard::new(
                    "TEKS.K.110.11.b.1",
                    "ela",
                    "K",
                    "Develop oral language and concepts of print needed for reading, including recognizing that spoken words can be represented by print for communication.",
                    &["oral language", "print concepts", "spoken words", "communication"],
                    "Reading/Beginning Reading Skills",
                ),
                Standard::new(
                    "TEKS.K.111.2.b.1",
                    "math",
                    "K",
                    "Count forward and backward to at least 20 with and without objects.",
                    &["counting", "forward", "backward", "objects", "number sequence"],
                    "Number and Operations",
                ),
            ],
        ),
        StateExtension::new(
            "New York",
            vec![Standard::new(
                "NYSLS.K.RL.1",
                "ela",
                "K",
                "With prompting and support, ask and answer questions about key details in a text.",
                &["questions", "key details", "text comprehension", "prompting", "support"],
                "Reading Literature",
            )],
        ),
        StateExtension::new(
            "Florida",
            vec![Standard::new(
                "LAFS.K.RL.1.1",
                "ela",
                "K",
                "With prompting and support, ask and answer questions about key details in a text.",
                &["questions", "key details", "text", "prompting", "support"],
                "Reading Literature",
            )],
        ),
    ]
}
