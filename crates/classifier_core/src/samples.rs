/// A canned input the user can load with one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub label: &'static str,
    /// One-line summary of the category, shown in the legend under the form.
    pub description: &'static str,
    pub text: &'static str,
}

/// Sinhala news headlines, one per category the reference model knows.
pub const SAMPLES: &[Sample] = &[
    Sample {
        label: "International",
        description: "World news & global events",
        text: "අලුත් යුද්ධයක් නිර්මාණය කරන බවට,වෙනිසියුලා ජනපතිගෙන් අමෙරිකාවට චෝදනා",
    },
    Sample {
        label: "Business",
        description: "Economy & corporate news",
        text: "කොළඹ කොටස් වෙළඳපොළ අද ලකුණු 50කින් ඉහළ ගියේය",
    },
    Sample {
        label: "Sport",
        description: "Sports & athletic events",
        text: "ශ්‍රී ලංකා ක්‍රිකට් කණ්ඩායම ජයග්‍රහණය කරයි",
    },
];
