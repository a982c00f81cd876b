// Performance benchmarks for t9-search operations

use std::time::Instant;
use t9_search::{
    encode_key, match_sequence, tokenize, Contact, MapTransliterator, NoTransliteration, T9Search,
};

const SYLLABLES: [(char, &str); 10] = [
    ('张', "zhang"),
    ('王', "wang"),
    ('李', "li"),
    ('赵', "zhao"),
    ('三', "san"),
    ('四', "si"),
    ('丰', "feng"),
    ('明', "ming"),
    ('华', "hua"),
    ('强', "qiang"),
];

fn main() {
    println!("T9 Search Performance Benchmarks\n");

    let pinyin: MapTransliterator = SYLLABLES.into_iter().collect();
    let search = build_roster(&pinyin, 10_000);

    // Warmup
    let _ = search.search("9");

    bench_encode(&pinyin);
    bench_match_sequence();
    bench_roster_search(&search);

    println!("\nBenchmarks completed!");
}

fn build_roster(pinyin: &MapTransliterator, size: usize) -> T9Search {
    let given: Vec<char> = SYLLABLES.iter().map(|(c, _)| *c).collect();
    let latin = ["Anna Lee", "Bob Smith", "John Q Smith", "Mary-Jane Watson"];

    let mut search = T9Search::new();
    for i in 0..size {
        let name = if i % 5 == 0 {
            latin[i % latin.len()].to_string()
        } else {
            [given[i % 4], given[4 + i % 6], given[(i / 7) % given.len()]]
                .iter()
                .collect()
        };
        let number = format!("1{:010}", i * 7919);
        search.push(Contact::from_name(&name, &number, pinyin));
    }
    search
}

fn bench_encode(pinyin: &MapTransliterator) {
    println!("ENCODE (tokenize + key)");
    println!("-----------------------");

    let names = ["张三丰", "王明华", "Anna Lee", "John Q Smith"];
    let iterations = 10_000;

    for name in names {
        let start = Instant::now();
        for _ in 0..iterations {
            let tokens = if name.is_ascii() {
                tokenize(name, &NoTransliteration)
            } else {
                tokenize(name, pinyin)
            };
            std::hint::black_box(encode_key(&tokens));
        }
        let duration = start.elapsed();

        println!(
            "  {:<14} -> {:.3}us per name",
            name,
            duration.as_secs_f64() * 1_000_000.0 / iterations as f64
        );
    }
    println!();
}

fn bench_match_sequence() {
    println!("MATCH SEQUENCE (backtracking)");
    println!("-----------------------------");

    let cases = [
        ("Y4264W26S364", "973"),
        ("Y4264W26S364", "9264726"),
        ("U646 W W6484", "577"),
        ("RVVR USS", "2662533"),
    ];
    let iterations = 100_000;

    for (key, constraint) in cases {
        let start = Instant::now();
        let mut found = 0;
        for _ in 0..iterations {
            if std::hint::black_box(match_sequence(key, constraint)).found() {
                found += 1;
            }
        }
        let duration = start.elapsed();

        println!(
            "  {:<14} {:<8} -> {:.1}ns per match ({} found)",
            key,
            constraint,
            duration.as_nanos() as f64 / iterations as f64,
            found
        );
    }
    println!();
}

fn bench_roster_search(search: &T9Search) {
    println!("ROSTER SEARCH ({} contacts)", search.len());
    println!("-----------------------------");

    let queries = ["9", "97", "9264", "5", "138", "0000"];

    for query in queries {
        let start = Instant::now();
        let results = search.search(query).unwrap_or_default();
        let duration = start.elapsed();

        println!(
            "  {:<10} -> {} results in {:.3}ms",
            query,
            results.len(),
            duration.as_secs_f64() * 1000.0
        );
    }

    #[cfg(feature = "parallel")]
    for query in queries {
        let start = Instant::now();
        let results = search.par_search(query).unwrap_or_default();
        let duration = start.elapsed();

        println!(
            "  {:<10} -> {} results in {:.3}ms (parallel)",
            query,
            results.len(),
            duration.as_secs_f64() * 1000.0
        );
    }
}
