use super::LocalePack;

pub(super) static UK_UA: LocalePack = LocalePack {
    code: "uk_UA",
    name: "Ukrainian (Ukraine)",
    title_prefixes: &[
        "Моє", "Твоє", "Наше", "Електричний", "Неоновий", "Золотий", "Срібний", "Опівнічний",
        "Кришталевий", "Оксамитовий", "Зламаний", "Загублений", "Вічний", "Священний", "Таємний",
        "Тихий", "Дикий", "Палаючий", "Замерзлий", "Танцюючий",
    ],
    title_nouns: &[
        "Серце", "Мрія", "Небо", "Вогонь", "Дощ", "Буря", "Ніч", "День", "Зірка", "Місяць",
        "Сонце", "Дорога", "Річка", "Океан", "Гора", "Ліс", "Місто", "Світло", "Тінь", "Грім",
        "Блискавка", "Вітер", "Полум'я", "Лід", "Діамант", "Троянда", "Вовк", "Орел", "Дракон",
        "Фенікс", "Ангел", "Привид", "Душа", "Час", "Любов", "Надія", "Страх", "Біль", "Радість",
        "Сльоза", "Усмішка", "Поцілунок", "Голос",
    ],
    title_suffixes: &[
        "Сьогодні Вночі", "Назавжди", "Знову", "Геть", "Всередині", "Зовні", "Вгорі", "Внизу",
        "За Межами", "Без", "Наодинці", "Разом", "Зараз", "Тоді",
    ],
    title_adjectives: &[
        "Красивий", "Небезпечний", "Таємничий", "Потужний", "Ніжний", "Лютий", "Спокійний",
        "Дикий", "Вільний", "Зв'язаний", "Загублений", "Знайдений", "Зламаний", "Цілий",
    ],
    band_prefixes: &[
        "Електричні", "Неонові", "Космічні", "Цифрові", "Аналогові", "Атомні", "Ядерні",
        "Звукові", "Супер", "Ультра", "Мега", "Гіпер", "Кібер", "Техно", "Ретро", "Нео",
    ],
    band_nouns: &[
        "Вовки", "Тигри", "Леви", "Орли", "Яструби", "Круки", "Ворони", "Змії", "Дракони",
        "Фенікси", "Єдинороги", "Лицарі", "Королі", "Королеви", "Принци", "Пірати", "Ніндзя",
        "Самураї", "Воїни", "Солдати", "Повстанці", "Розбійники", "Привиди", "Духи", "Ангели",
        "Демони", "Вампіри", "Зомбі", "Прибульці", "Роботи", "Машини", "Двигуни", "Ракети",
        "Зірки", "Планети", "Галактики", "Хвилі",
    ],
    band_suffixes: &[
        "Бенд", "Команда", "Загін", "Банда", "Колектив", "Товариство", "Клуб", "Союз", "Альянс",
        "Орден", "Гільдія", "Збори", "Проект", "Досвід", "Звук",
    ],
    album_words: &[
        "Подорож", "Мандрівка", "Пригода", "Пошук", "Місія", "Одіссея", "Експедиція", "Хроніки",
        "Казки", "Історії", "Легенди", "Міфи", "Мрії", "Візії", "Відображення", "Ехо", "Тіні",
        "Вогні", "Кольори", "Пори Року", "Елементи", "Виміри", "Світи",
    ],
    given_names: &[
        "Олександр", "Олена", "Андрій", "Наталія", "Дмитро", "Ірина", "Сергій", "Оксана",
        "Максим", "Тетяна", "Іван", "Юлія", "Микола", "Анна", "Богдан", "Марія", "Тарас",
        "Софія", "Володимир", "Катерина", "Василь", "Христина",
    ],
    family_names: &[
        "Шевченко", "Коваленко", "Бондаренко", "Ткаченко", "Кравченко", "Олійник", "Шевчук",
        "Поліщук", "Бойко", "Мельник", "Коваль", "Лисенко", "Марченко", "Руденко", "Савченко",
        "Петренко", "Клименко", "Павленко", "Гончаренко", "Кузьменко",
    ],
    genres: &[
        "Рок", "Поп", "Електроніка", "Хіп-Хоп", "R&B", "Джаз", "Блюз", "Кантрі", "Фолк",
        "Класика", "Метал", "Панк", "Інді", "Альтернатива", "Соул", "Фанк", "Диско", "Хаус",
        "Техно", "Транс", "Ембієнт", "Реггі", "Українська Естрада",
    ],
    review_phrases: &[
        "Цей трек веде вас у неймовірну подорож звуком та емоціями.",
        "Шедевр, що бездоганно поєднує жанри з інноваційним продакшеном.",
        "Артист демонструє тут свій неймовірний діапазон та музичну майстерність.",
        "Незабутня мелодія, яка залишиться з вами надовго після прослуховування.",
        "Сміливий та експериментальний, залишаючись глибоко доступним і цікавим.",
        "Чистий музичний геній у кожній ноті та биті.",
        "Ця пісня переосмислює те, чого може досягти сучасна музика.",
        "Звуковий досвід, що виходить за традиційні межі.",
        "Кожен елемент ідеально створений для звукового блаженства.",
        "Якість продакшена тут абсолютно приголомшлива.",
    ],
    lyric_phrases: &[
        "Кожен удар нагадує мені про тебе, розриває мене",
        "Серед мільйонів сонць, що сяють, ти найяскравіша зірка",
        "На світанку ти все що я хочу, незалежно від відстані",
        "О Мелані, я намагаюся рухатися далі",
        "Танцюючи у місячному світлі, почуваюсь таким живим",
        "Ми були молоді і вільні, ніщо не могло нас зупинити",
        "Візьми мою руку і ніколи не відпускай",
        "Крізь бурю ми знайдемо шлях додому",
        "Твоя любов як яскраво палаючий вогонь",
        "Я чекатиму вічно якщо це займе стільки часу",
        "Ніч молода і ми теж",
        "Загублений у твоїх очах я знайшов свій рай",
        "Біжучи крізь дощ, знову ганяючись за мріями",
        "Ти мелодія в моєму серці",
        "Разом ми можемо досягти зірок вгорі",
    ],
    single_label: "Сингл",
};
