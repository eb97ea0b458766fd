//! Hand-authored demo records for five cities.

use acore::{City, Landmark, LocalizedText};
use std::collections::BTreeMap;

fn text(en: &str, zh: &str) -> LocalizedText {
    LocalizedText::new(en, zh)
}

#[allow(clippy::too_many_arguments)]
fn landmark(
    id: &str,
    name: LocalizedText,
    lat: f64,
    lng: f64,
    book_title: LocalizedText,
    author: LocalizedText,
    quote: LocalizedText,
    traveler_note: LocalizedText,
    cover_url: &str,
) -> Landmark {
    Landmark {
        id: id.into(),
        name,
        lat,
        lng,
        book_title,
        author,
        quote,
        traveler_note,
        cover_url: Some(cover_url.to_owned()),
        reviews: None,
        google_maps_uri: None,
    }
}

pub(crate) fn cities() -> BTreeMap<&'static str, City> {
    BTreeMap::from([
        (
            "london",
            City {
                name: text("London", "伦敦"),
                lat: 51.5074,
                lng: -0.1278,
                locations: vec![
                    landmark(
                        "l1",
                        text("221B Baker Street", "贝克街221B"),
                        51.5237,
                        -0.1585,
                        text("Sherlock Holmes", "福尔摩斯探案集"),
                        text("Arthur Conan Doyle", "阿瑟·柯南·道尔"),
                        text("The game is afoot.", "游戏开始了。"),
                        text(
                            "Now a museum dedicated to the detective.",
                            "现在是致力于这位大侦探的博物馆。",
                        ),
                        "https://picsum.photos/200/300?random=1",
                    ),
                    landmark(
                        "l2",
                        text("The British Museum", "大英博物馆"),
                        51.5194,
                        -0.1270,
                        text("Maurice", "莫里斯"),
                        text("E.M. Forster", "E.M. 福斯特"),
                        text(
                            "You can't get away from tradition in England.",
                            "在英国，你无法摆脱传统。",
                        ),
                        text(
                            "The Reading Room is where many literary giants studied.",
                            "阅览室曾是许多文学巨匠学习的地方。",
                        ),
                        "https://picsum.photos/200/300?random=2",
                    ),
                ],
            },
        ),
        (
            "florence",
            City {
                name: text("Florence", "佛罗伦萨"),
                lat: 43.7696,
                lng: 11.2558,
                locations: vec![
                    landmark(
                        "f1",
                        text("Casa di Dante", "但丁故居"),
                        43.7705,
                        11.2568,
                        text("The Divine Comedy", "神曲"),
                        text("Dante Alighieri", "但丁·阿利吉耶里"),
                        text(
                            "Midway upon the journey of our life I found myself within a forest dark.",
                            "在人生的旅途过半时，我发现自己步入一片幽暗的树林，因为正确的道路已经模糊不清。",
                        ),
                        text(
                            "Visit the narrow streets where the poet once glimpsed Beatrice.",
                            "造访狭窄的小巷，寻找诗人曾凝望贝阿特丽切的身影。",
                        ),
                        "https://picsum.photos/200/300?random=10",
                    ),
                    landmark(
                        "f2",
                        text("Ponte alle Grazie", "恩宠桥"),
                        43.7663,
                        11.2582,
                        text("A Room with a View", "看得见风景的房间"),
                        text("E.M. Forster", "E.M. 福斯特"),
                        text(
                            "This is the Arno, this is the room with the view.",
                            "这就是阿诺河，这就是那个有着如此惊人风景的房间。",
                        ),
                        text(
                            "Look for the Tuscan sunlight that charmed Lucy.",
                            "前往阿诺河边，寻找福斯特笔下那抹让露西心动的托斯卡纳阳光。",
                        ),
                        "https://picsum.photos/200/300?random=11",
                    ),
                ],
            },
        ),
        (
            "venice",
            City {
                name: text("Venice", "威尼斯"),
                lat: 45.4408,
                lng: 12.3155,
                locations: vec![landmark(
                    "v1",
                    text("Lido", "丽都岛"),
                    45.4168,
                    12.3734,
                    text("Death in Venice", "威尼斯之死"),
                    text("Thomas Mann", "托马斯·曼"),
                    text(
                        "He sat there... facing the sea... Venice, this flattering and suspect beauty.",
                        "他坐在那里，那是一个有着玻璃屋顶的凉台，面对着大海……威尼斯，这诱人而又令人生疑的国家。",
                    ),
                    text(
                        "Take the Vaporetto to the beach where the film festival is held.",
                        "搭乘水上巴士前往丽都岛，在电影节举办地的沙滩上感受那份凄美的忧郁。",
                    ),
                    "https://picsum.photos/200/300?random=12",
                )],
            },
        ),
        (
            "rome",
            City {
                name: text("Rome", "罗马"),
                lat: 41.8902,
                lng: 12.4922,
                locations: vec![landmark(
                    "r1",
                    text("Antico Caffè Greco", "古希腊咖啡馆"),
                    41.9059,
                    12.4813,
                    text("Italian Journey", "意大利游记"),
                    text("Johann Wolfgang von Goethe", "歌德"),
                    text(
                        "Yes, I have finally arrived at this capital of the world!",
                        "是的，我终于到达了这个世界的首都！",
                    ),
                    text(
                        "A haunt for Goethe, Byron and Keats on Via Condotti.",
                        "去康多提街的古希腊咖啡馆，这里曾是歌德、拜伦和济慈最爱的聚集地。",
                    ),
                    "https://picsum.photos/200/300?random=13",
                )],
            },
        ),
        (
            "naples",
            City {
                name: text("Naples", "那不勒斯"),
                lat: 40.8518,
                lng: 14.2681,
                locations: vec![landmark(
                    "n1",
                    text("Rione Luzzatti", "卢扎蒂区"),
                    40.8560,
                    14.2880,
                    text("My Brilliant Friend", "我的天才女友"),
                    text("Elena Ferrante", "埃莱娜·费兰特"),
                    text(
                        "In Naples, it felt like the whole city was trying to push you away and hold you tight.",
                        "在那不勒斯，那种感觉就像是整个城市都在努力推开你，又在死死拽住你。",
                    ),
                    text(
                        "Walk the paths of Lila and Elena's childhood in the old neighborhood.",
                        "避开繁华大道，去老城区的平民区，寻找莉拉和埃莱娜童年奔跑的足迹。",
                    ),
                    "https://picsum.photos/200/300?random=14",
                )],
            },
        ),
    ])
}
