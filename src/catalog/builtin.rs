//! Built-in question and symptom tables.

use super::types::{Category, FollowUpRule, Question, QuestionType, Symptom, SymptomSeverity};
use super::{
    CHEST_PAIN_CRUSHING, ONSET_QUESTION_ID, ONSET_SPEED_QUESTION_ID, SEVERITY_QUESTION_ID,
    VERY_SUDDEN_ONSET, WORST_HEADACHE,
};

use SymptomSeverity::{Mild, Moderate, Severe};

/// All built-in categories in lookup order.
pub(super) fn categories() -> Vec<Category> {
    vec![
        Category::new("initial", initial()),
        Category::new("emergency_symptoms", emergency()),
        Category::new("cardiovascular", cardiovascular()),
        Category::new("neurological", neurological()),
        Category::new("respiratory", respiratory()),
        Category::new("gastrointestinal", gastrointestinal()),
        Category::new("musculoskeletal", musculoskeletal()),
        Category::new("general", general()),
    ]
}

/// Symptoms offered by differential questions.
pub(super) fn discriminators() -> Vec<Symptom> {
    vec![
        Symptom::new(
            "fever",
            "Fever",
            "Body temperature above normal",
            Mild,
            "general",
            &["Infection", "Inflammatory Condition"],
        ),
        Symptom::new(
            "fatigue",
            "Unusual fatigue",
            "Feeling more tired than usual",
            Mild,
            "general",
            &["Viral Infection", "Anemia", "Depression"],
        ),
    ]
}

fn initial() -> Vec<Question> {
    vec![
        Question::new(
            "chief_complaint",
            "In your own words, what is bothering you most right now?",
            QuestionType::Open,
        )
        .required(),
        Question::new(
            ONSET_QUESTION_ID,
            "When did you first notice these symptoms?",
            QuestionType::Duration,
        )
        .required(),
        Question::new(
            SEVERITY_QUESTION_ID,
            "On a scale of 1-10, how much is this affecting your daily life?",
            QuestionType::Scale,
        )
        .required(),
        Question::new(
            ONSET_SPEED_QUESTION_ID,
            "Did your symptoms come on suddenly or gradually?",
            QuestionType::Multiple,
        )
        .required()
        .with_options(&[
            VERY_SUDDEN_ONSET,
            "Gradually over hours",
            "Gradually over days",
            "Gradually over weeks",
        ])
        .with_follow_up(FollowUpRule::OnsetSpeed),
    ]
}

fn emergency() -> Vec<Question> {
    vec![Question::new(
        "emergency_check",
        "Are you experiencing any of these emergency symptoms right now?",
        QuestionType::Symptoms,
    )
    .required()
    .with_symptoms(vec![
        Symptom::new(
            "chest_pain_severe",
            "Severe chest pain or pressure",
            "Crushing, squeezing, or heavy pressure in your chest",
            Severe,
            "cardiovascular",
            &["Heart Attack", "Unstable Angina"],
        ),
        Symptom::new(
            "breathing_difficulty",
            "Severe difficulty breathing",
            "Cannot catch your breath or speak in full sentences",
            Severe,
            "respiratory",
            &["Pulmonary Embolism", "Severe Asthma", "Heart Failure"],
        ),
        Symptom::new(
            "consciousness_loss",
            "Loss of consciousness or fainting",
            "Passed out or nearly passed out",
            Severe,
            "neurological",
            &["Cardiac Arrhythmia", "Stroke", "Severe Dehydration"],
        ),
        Symptom::new(
            "severe_headache",
            "Sudden, severe headache",
            "The worst headache of your life, reaching full strength within a minute",
            Severe,
            "neurological",
            &["Subarachnoid Hemorrhage", "Stroke"],
        ),
    ])]
}

fn cardiovascular() -> Vec<Question> {
    vec![
        Question::new(
            "cardiovascular_symptoms",
            "Which of these symptoms are you experiencing right now?",
            QuestionType::Symptoms,
        )
        .required()
        .with_symptoms(vec![
            Symptom::new(
                "chest_pain_crushing",
                "Crushing Chest Pain",
                "Heavy pressure or squeezing sensation in your chest",
                Severe,
                "cardiovascular",
                &["Heart Attack", "Unstable Angina", "Aortic Dissection"],
            ),
            Symptom::new(
                "chest_pain_sharp",
                "Sharp Chest Pain",
                "Stabbing or knife-like pain in your chest",
                Moderate,
                "cardiovascular",
                &["Pericarditis", "Pleuritis", "Costochondritis"],
            ),
            Symptom::new(
                "palpitations",
                "Heart Palpitations",
                "Feeling of rapid, fluttering, or pounding heartbeat",
                Moderate,
                "cardiovascular",
                &["Atrial Fibrillation", "Anxiety", "Hyperthyroidism"],
            ),
            Symptom::new(
                "shortness_breath_exertion",
                "Shortness of Breath with Activity",
                "Difficulty breathing during physical activity",
                Moderate,
                "cardiovascular",
                &["Heart Failure", "Coronary Artery Disease", "Pulmonary Embolism"],
            ),
            Symptom::new(
                "shortness_breath_rest",
                "Shortness of Breath at Rest",
                "Difficulty breathing even when not active",
                Severe,
                "cardiovascular",
                &["Acute Heart Failure", "Pulmonary Edema", "Severe Asthma"],
            ),
            Symptom::new(
                "leg_swelling",
                "Leg Swelling",
                "Swelling in your ankles, feet, or legs",
                Mild,
                "cardiovascular",
                &["Heart Failure", "Venous Insufficiency", "Kidney Disease"],
            ),
            Symptom::new(
                "fainting",
                "Fainting Episodes",
                "Loss of consciousness or near-fainting",
                Moderate,
                "cardiovascular",
                &[
                    "Vasovagal Syncope",
                    "Cardiac Arrhythmia",
                    "Orthostatic Hypotension",
                ],
            ),
        ]),
        Question::new(
            "chest_pain_quality",
            "How would you describe your chest discomfort?",
            QuestionType::Multiple,
        )
        .required()
        .with_options(&[
            CHEST_PAIN_CRUSHING,
            "Sharp, stabbing pain",
            "Burning sensation",
            "Dull, aching pain",
            "Tightness or heaviness",
        ])
        .with_follow_up(FollowUpRule::ChestPainQuality),
        Question::new(
            "heart_attack_symptoms",
            "Are you also experiencing any of these symptoms?",
            QuestionType::Symptoms,
        )
        .with_symptoms(vec![
            Symptom::new(
                "arm_pain",
                "Pain in arm, jaw, or back",
                "Pain spreading to your left arm, jaw, neck, or back",
                Moderate,
                "cardiovascular",
                &["Heart Attack"],
            ),
            Symptom::new(
                "sweating",
                "Cold sweats",
                "Breaking out in a cold sweat",
                Moderate,
                "cardiovascular",
                &["Heart Attack"],
            ),
            Symptom::new(
                "nausea_cardiac",
                "Nausea or lightheadedness",
                "Feeling sick to your stomach or dizzy",
                Moderate,
                "cardiovascular",
                &["Heart Attack"],
            ),
        ]),
        Question::new(
            "chest_pain_triggers",
            "What seems to bring on or change the chest discomfort?",
            QuestionType::Multiple,
        )
        .with_options(&[
            "Physical exertion",
            "Deep breathing or coughing",
            "Pressing on the chest",
            "Eating or lying down",
            "Emotional stress",
            "Nothing specific",
        ]),
        Question::new(
            "pain_radiation",
            "Does any pain spread to other areas?",
            QuestionType::Multiple,
        )
        .with_options(&[
            "Left arm",
            "Right arm",
            "Both arms",
            "Jaw",
            "Neck",
            "Back",
            "Stomach",
            "No spreading pain",
        ]),
    ]
}

fn neurological() -> Vec<Question> {
    vec![
        Question::new(
            "neurological_symptoms",
            "Which of these symptoms are you experiencing right now?",
            QuestionType::Symptoms,
        )
        .required()
        .with_symptoms(vec![
            Symptom::new(
                "headache_tension",
                "Tension Headache",
                "Dull, aching head pain with tightness around your forehead",
                Mild,
                "neurological",
                &["Tension Headache", "Stress-related Headache", "Muscle Tension"],
            ),
            Symptom::new(
                "headache_migraine",
                "Migraine-like Headache",
                "Throbbing, pulsating pain often on one side of your head",
                Moderate,
                "neurological",
                &["Migraine", "Cluster Headache", "Vascular Headache"],
            ),
            Symptom::new(
                "headache_sudden_severe",
                "Sudden Severe Headache",
                "The worst headache of your life that came on suddenly",
                Severe,
                "neurological",
                &["Subarachnoid Hemorrhage", "Meningitis", "Brain Aneurysm"],
            ),
            Symptom::new(
                "dizziness_lightheaded",
                "Lightheadedness",
                "Feeling faint or like you might pass out",
                Mild,
                "neurological",
                &["Dehydration", "Low Blood Pressure", "Anemia"],
            ),
            Symptom::new(
                "dizziness_vertigo",
                "Vertigo",
                "Spinning sensation, like the room is moving around you",
                Moderate,
                "neurological",
                &["BPPV", "Vestibular Neuritis", "Meniere's Disease"],
            ),
            Symptom::new(
                "confusion",
                "Confusion",
                "Difficulty thinking clearly or remembering things",
                Moderate,
                "neurological",
                &["Delirium", "Dementia", "Medication Side Effects"],
            ),
            Symptom::new(
                "memory_loss",
                "Memory Problems",
                "Trouble remembering recent events or information",
                Moderate,
                "neurological",
                &[
                    "Alzheimer's Disease",
                    "Mild Cognitive Impairment",
                    "Depression",
                ],
            ),
            Symptom::new(
                "seizure_like",
                "Seizure-like Episodes",
                "Episodes of uncontrolled movements or loss of consciousness",
                Severe,
                "neurological",
                &["Epilepsy", "Non-epileptic Seizures", "Brain Tumor"],
            ),
        ]),
        Question::new(
            "headache_characteristics",
            "How would you describe your headache?",
            QuestionType::Multiple,
        )
        .required()
        .with_options(&[
            WORST_HEADACHE,
            "Throbbing on one side",
            "Dull ache all over",
            "Sharp, stabbing pain",
            "Pressure or tightness",
        ])
        .with_follow_up(FollowUpRule::HeadacheCharacter),
        Question::new(
            "severe_headache_symptoms",
            "Are you experiencing any of these additional symptoms?",
            QuestionType::Symptoms,
        )
        .with_symptoms(vec![
            Symptom::new(
                "neck_stiffness_acute",
                "Neck stiffness",
                "Difficulty moving your neck or touching chin to chest",
                Severe,
                "neurological",
                &["Meningitis", "Subarachnoid Hemorrhage"],
            ),
            Symptom::new(
                "vision_changes",
                "Vision changes",
                "Blurred vision, double vision, or vision loss",
                Severe,
                "neurological",
                &["Stroke", "Increased Intracranial Pressure"],
            ),
            Symptom::new(
                "confusion_acute",
                "Confusion or altered mental state",
                "Difficulty thinking clearly or remembering",
                Severe,
                "neurological",
                &["Stroke", "Meningitis"],
            ),
        ]),
        Question::new(
            "headache_triggers",
            "What seems to bring on your headaches?",
            QuestionType::Multiple,
        )
        .with_options(&[
            "Stress or tension",
            "Lack of sleep",
            "Bright lights or screens",
            "Certain foods or alcohol",
            "Skipped meals",
            "No clear trigger",
        ]),
        Question::new(
            "headache_location",
            "If you have a headache, where do you feel it?",
            QuestionType::Multiple,
        )
        .with_options(&[
            "Front of head/forehead",
            "Sides of head (temples)",
            "Back of head/neck",
            "Top of head",
            "Behind eyes",
            "One side only",
            "All over",
            "No headache",
        ]),
        Question::new(
            "neurological_associated",
            "Are you experiencing any of these other symptoms?",
            QuestionType::Multiple,
        )
        .with_options(&[
            "Nausea or vomiting",
            "Sensitivity to light",
            "Sensitivity to sound",
            "Vision changes",
            "Weakness in arms/legs",
            "Difficulty speaking",
            "Neck stiffness",
        ]),
    ]
}

fn respiratory() -> Vec<Question> {
    vec![Question::new(
        "respiratory_symptoms",
        "Which of these symptoms are you experiencing right now?",
        QuestionType::Symptoms,
    )
    .required()
    .with_symptoms(vec![
        Symptom::new(
            "cough_dry",
            "Dry Cough",
            "Persistent cough without mucus production",
            Mild,
            "respiratory",
            &[
                "Viral Upper Respiratory Infection",
                "Allergies",
                "ACE Inhibitor Side Effect",
            ],
        ),
        Symptom::new(
            "cough_productive",
            "Productive Cough",
            "Cough with mucus or phlegm",
            Moderate,
            "respiratory",
            &["Bacterial Pneumonia", "Bronchitis", "COPD Exacerbation"],
        ),
        Symptom::new(
            "cough_blood",
            "Coughing Blood",
            "Blood in sputum or coughing up blood",
            Severe,
            "respiratory",
            &["Lung Cancer", "Tuberculosis", "Pulmonary Embolism"],
        ),
        Symptom::new(
            "wheezing",
            "Wheezing",
            "High-pitched whistling sound when breathing",
            Moderate,
            "respiratory",
            &["Asthma", "COPD", "Bronchospasm"],
        ),
        Symptom::new(
            "chest_tightness",
            "Chest Tightness",
            "Feeling of pressure or constriction in your chest",
            Moderate,
            "respiratory",
            &["Asthma", "Anxiety", "Costochondritis"],
        ),
    ])]
}

fn gastrointestinal() -> Vec<Question> {
    vec![
        Question::new(
            "gastrointestinal_symptoms",
            "Which of these symptoms are you experiencing right now?",
            QuestionType::Symptoms,
        )
        .required()
        .with_symptoms(vec![
            Symptom::new(
                "nausea_mild",
                "Mild Nausea",
                "Feeling queasy or unsettled stomach",
                Mild,
                "gastrointestinal",
                &["Gastroenteritis", "Food Poisoning", "Motion Sickness"],
            ),
            Symptom::new(
                "vomiting_persistent",
                "Persistent Vomiting",
                "Unable to keep food or fluids down",
                Moderate,
                "gastrointestinal",
                &["Gastroenteritis", "Bowel Obstruction", "Gastroparesis"],
            ),
            Symptom::new(
                "vomiting_blood",
                "Vomiting Blood",
                "Blood in vomit or coffee-ground appearance",
                Severe,
                "gastrointestinal",
                &["Upper GI Bleeding", "Peptic Ulcer", "Esophageal Varices"],
            ),
            Symptom::new(
                "abdominal_pain_cramping",
                "Cramping Abdominal Pain",
                "Intermittent, cramping pain in your abdomen",
                Mild,
                "gastrointestinal",
                &[
                    "Irritable Bowel Syndrome",
                    "Gastroenteritis",
                    "Food Intolerance",
                ],
            ),
            Symptom::new(
                "abdominal_pain_severe",
                "Severe Abdominal Pain",
                "Intense, constant abdominal pain",
                Severe,
                "gastrointestinal",
                &["Appendicitis", "Bowel Obstruction", "Pancreatitis"],
            ),
            Symptom::new(
                "diarrhea_watery",
                "Watery Diarrhea",
                "Frequent, loose, watery stools",
                Mild,
                "gastrointestinal",
                &["Viral Gastroenteritis", "Food Poisoning", "IBS"],
            ),
            Symptom::new(
                "diarrhea_bloody",
                "Bloody Diarrhea",
                "Diarrhea with visible blood",
                Severe,
                "gastrointestinal",
                &[
                    "Inflammatory Bowel Disease",
                    "C. diff Colitis",
                    "Ischemic Colitis",
                ],
            ),
        ]),
        Question::new(
            "abdominal_location",
            "If you have stomach pain, where do you feel it?",
            QuestionType::Multiple,
        )
        .with_options(&[
            "Upper right (under ribs)",
            "Upper left (under ribs)",
            "Upper center (stomach area)",
            "Lower right",
            "Lower left",
            "Lower center",
            "Around belly button",
            "All over stomach",
            "No stomach pain",
        ]),
        Question::new(
            "bowel_changes",
            "Have you noticed any changes in your bowel movements?",
            QuestionType::Multiple,
        )
        .with_options(&[
            "Diarrhea",
            "Constipation",
            "Blood in stool",
            "Black/tarry stools",
            "Mucus in stool",
            "Change in frequency",
            "No changes",
        ]),
    ]
}

fn musculoskeletal() -> Vec<Question> {
    vec![Question::new(
        "musculoskeletal_symptoms",
        "Which of these symptoms are you experiencing right now?",
        QuestionType::Symptoms,
    )
    .required()
    .with_symptoms(vec![
        Symptom::new(
            "joint_pain_mild",
            "Mild Joint Pain",
            "Aching or stiffness in your joints",
            Mild,
            "musculoskeletal",
            &["Osteoarthritis", "Overuse Injury", "Viral Arthritis"],
        ),
        Symptom::new(
            "joint_pain_severe",
            "Severe Joint Pain",
            "Intense pain with swelling and redness",
            Severe,
            "musculoskeletal",
            &["Septic Arthritis", "Gout", "Rheumatoid Arthritis"],
        ),
        Symptom::new(
            "muscle_aches",
            "Muscle Aches",
            "Generalized muscle pain and soreness",
            Mild,
            "musculoskeletal",
            &["Viral Myalgia", "Fibromyalgia", "Overexertion"],
        ),
        Symptom::new(
            "back_pain_lower",
            "Lower Back Pain",
            "Pain in your lower back region",
            Moderate,
            "musculoskeletal",
            &["Muscle Strain", "Herniated Disc", "Sciatica"],
        ),
        Symptom::new(
            "neck_stiffness",
            "Neck Stiffness",
            "Difficulty moving your neck, stiffness",
            Moderate,
            "musculoskeletal",
            &["Muscle Strain", "Meningitis", "Cervical Spondylosis"],
        ),
    ])]
}

fn general() -> Vec<Question> {
    vec![Question::new(
        "general_symptoms",
        "Which of these symptoms are you experiencing right now?",
        QuestionType::Symptoms,
    )
    .required()
    .with_symptoms(vec![
        Symptom::new(
            "fever_low",
            "Low-grade Fever",
            "Temperature 100-102°F (37.8-38.9°C)",
            Mild,
            "general",
            &[
                "Viral Infection",
                "Bacterial Infection",
                "Inflammatory Condition",
            ],
        ),
        Symptom::new(
            "fever_high",
            "High Fever",
            "Temperature above 102°F (38.9°C)",
            Moderate,
            "general",
            &["Bacterial Infection", "Severe Viral Infection", "Sepsis"],
        ),
        Symptom::new(
            "fatigue_mild",
            "Mild Fatigue",
            "Feeling tired but able to function",
            Mild,
            "general",
            &["Viral Infection", "Sleep Deprivation", "Stress"],
        ),
        Symptom::new(
            "fatigue_severe",
            "Severe Fatigue",
            "Extreme tiredness affecting daily activities",
            Moderate,
            "general",
            &["Chronic Fatigue Syndrome", "Depression", "Anemia"],
        ),
        Symptom::new(
            "weight_loss_unintentional",
            "Unintentional Weight Loss",
            "Losing weight without trying",
            Moderate,
            "general",
            &["Cancer", "Hyperthyroidism", "Diabetes"],
        ),
        Symptom::new(
            "night_sweats",
            "Night Sweats",
            "Excessive sweating during sleep",
            Mild,
            "general",
            &["Infection", "Lymphoma", "Menopause"],
        ),
    ])]
}
