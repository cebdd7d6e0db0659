use wordfreq::generate::TextGenerator;
use wordfreq::{AnalyzerBuilder, Boundary, Punctuation};

fn main() {
    let generator = TextGenerator::from_seed(2024);
    let text = (0..50)
        .map(|_| generator.generate(12).expect("generation failed"))
        .collect::<Vec<String>>()
        .join(" ");

    let analyzer = AnalyzerBuilder::new()
        .chunk_size(64)
        .boundary(Boundary::Whitespace)
        .punctuation(Punctuation::default())
        .build()
        .expect("couldn't build analyzer");

    let analysis = analyzer.analyze(&text).expect("analysis failed");

    for word in analysis.ranked().top(10) {
        println!("{}: {}x", word.content, word.count);
    }

    println!("of: {}", analysis.lookup("of"));
}
